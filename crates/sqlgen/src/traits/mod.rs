mod reflect;

use crate::{
    error::Error,
    generate,
    model::{kind::Kind, record::RecordModel},
};

///
/// Reflect
///
/// Runtime shape of a type. Implemented for primitives, strings, std
/// containers and smart pointers here, and for records by `#[derive(Record)]`.
///

pub trait Reflect {
    fn kind() -> Kind;
}

///
/// Record
///
/// Struct with named fields that maps 1:1 onto a table.
///
/// `MODEL` is authoritative: table and column names are derived from it and
/// nothing else. The provided `*_sql` functions skip the runtime kind check
/// the free functions perform, but render byte-identical text.
///

pub trait Record: Reflect {
    const MODEL: &'static RecordModel;

    /// Declared type name, as used in error messages.
    #[must_use]
    fn type_name() -> &'static str {
        Self::MODEL.name
    }

    #[must_use]
    fn table_name() -> String {
        Self::MODEL.table_name()
    }

    #[must_use]
    fn field_names() -> Vec<String> {
        Self::MODEL.field_names()
    }

    fn select_sql(fields: &[&str]) -> Result<String, Error> {
        generate::select_model(Self::MODEL, fields)
    }

    #[must_use]
    fn insert_sql() -> String {
        generate::insert_model(Self::MODEL)
    }

    fn update_sql(update: &[&str], filter: &[&str]) -> Result<String, Error> {
        generate::update_model(Self::MODEL, update, filter)
    }

    #[must_use]
    fn delete_sql(filter: &[&str]) -> String {
        generate::delete_model(Self::MODEL, filter)
    }
}
