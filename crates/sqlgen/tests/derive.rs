use sqlgen::{Error, Record, Reflect, model::kind::Kind};
use std::{rc::Rc, sync::Arc};

#[derive(Debug, Default, Record)]
#[allow(dead_code)]
struct Person {
    id: u64,
    name: String,
    age: u32,
}

#[derive(Debug, Default, Record)]
#[allow(dead_code)]
struct OrderLine {
    order_id: u64,
    sku: String,
    quantity: u32,
    unit_price: f64,
}

#[derive(Debug, Default, Record)]
#[allow(dead_code)]
struct Item {
    r#type: String,
    r#ref: u32,
}

#[derive(Debug, Default, Record)]
#[allow(dead_code)]
struct Envelope<T: Default> {
    id: u64,
    payload: T,
}

mod facade {
    pub use sqlgen::{model, traits};
}

#[derive(Debug, Default, Record)]
#[allow(dead_code)]
#[sqlgen(crate = "crate::facade")]
struct Audit {
    at: u64,
    actor: String,
}

#[test]
fn derived_kind_is_record() {
    assert!(matches!(Person::kind(), Kind::Record(model) if model.name == "Person"));
    assert!(matches!(<&Person>::kind(), Kind::Ref(_)));
}

#[test]
fn person_round_of_statements() {
    let p = Person::default();

    assert_eq!(
        sqlgen::select(&p, &[]).unwrap(),
        "select id, name, age from person"
    );
    assert_eq!(
        sqlgen::insert(&p).unwrap(),
        "insert into person (id, name, age) values (?, ?, ?)"
    );
    assert_eq!(
        sqlgen::update(&p, &["name", "age"], &["id"]).unwrap(),
        "update person set name=?, age=? where id=?"
    );
    assert_eq!(
        sqlgen::delete(&p, &["name", "age"]),
        "delete from person where name=? and age=?"
    );
}

#[test]
fn table_name_is_plain_lowercase() {
    assert_eq!(OrderLine::table_name(), "orderline");
    assert_eq!(
        OrderLine::insert_sql(),
        "insert into orderline (order_id, sku, quantity, unit_price) values (?, ?, ?, ?)"
    );
}

#[test]
fn raw_identifier_fields_become_plain_columns() {
    assert_eq!(Item::field_names(), ["type", "ref"]);
    assert_eq!(
        sqlgen::select(&Item::default(), &["ref"]).unwrap(),
        "select ref from item"
    );
}

#[test]
fn generic_records_use_bare_type_name() {
    let envelope = Envelope::<String>::default();

    assert_eq!(Envelope::<u8>::type_name(), "Envelope");
    assert_eq!(
        sqlgen::select(&envelope, &[]).unwrap(),
        "select id, payload from envelope"
    );
    assert_eq!(
        Envelope::<String>::select_sql(&[]),
        Envelope::<bool>::select_sql(&[])
    );
}

#[test]
fn crate_override_reaches_runtime_through_facade() {
    assert_eq!(
        sqlgen::insert(&Audit::default()).unwrap(),
        "insert into audit (at, actor) values (?, ?)"
    );
}

#[test]
fn smart_pointers_to_records_are_accepted() {
    let expected = sqlgen::select(&Person::default(), &[]);

    assert_eq!(sqlgen::select(&Rc::new(Person::default()), &[]), expected);
    assert_eq!(sqlgen::select(&Arc::new(Person::default()), &[]), expected);
    assert_eq!(sqlgen::select(&Box::new(Person::default()), &[]), expected);
}

#[test]
fn non_records_are_rejected_with_stable_message() {
    let cases = [
        sqlgen::select(&10_i32, &[]),
        sqlgen::select(&String::from("person"), &[]),
        sqlgen::insert(&Some(Person::default())),
        sqlgen::insert(&vec![Person::default()]),
        sqlgen::update(&(), &["id"], &["id"]),
    ];

    for result in cases {
        let err = result.expect_err("non-record input must fail");

        assert_eq!(err, Error::InvalidInputKind);
        assert_eq!(err.to_string(), "you must provide a struct value or pointer");
    }
}
