//! Statement generation.
//!
//! The free functions accept any [`Reflect`] value and check its kind at
//! runtime. The `*_model` functions work on an already-resolved
//! [`RecordModel`], which may be derived or written by hand; they back both
//! the free functions and the provided methods on [`Record`].

pub mod check;
pub mod clause;
mod request;


pub use check::{check_presence_of_fields, check_type};
pub use request::{Request, StatementKind, generate};

use crate::{
    error::Error,
    model::record::RecordModel,
    traits::{Record, Reflect},
};
use tracing::trace;

/// Generate `select ... from <table>` for `record`.
///
/// With no `fields`, every field is selected in declaration order. Otherwise
/// each requested field must exist on the record and the given order is kept.
pub fn select<T: Reflect + ?Sized>(record: &T, fields: &[&str]) -> Result<String, Error> {
    select_model(check_type(record)?, fields)
}

/// Generate `insert into <table> (...) values (?, ...)` covering every field.
pub fn insert<T: Reflect + ?Sized>(record: &T) -> Result<String, Error> {
    Ok(insert_model(check_type(record)?))
}

/// Generate `update <table> set ... where ...`.
///
/// `update` fields are checked before `filter` fields.
pub fn update<T: Reflect + ?Sized>(
    record: &T,
    update: &[&str],
    filter: &[&str],
) -> Result<String, Error> {
    update_model(check_type(record)?, update, filter)
}

/// Generate `delete from <table> where ...`.
///
/// Filter fields are NOT checked against the record; use [`try_delete`] for
/// the validated form.
#[must_use]
pub fn delete<R: Record + ?Sized>(_record: &R, filter: &[&str]) -> String {
    delete_model(R::MODEL, filter)
}

/// Validated form of [`delete`]: filter fields must exist on the record.
pub fn try_delete<T: Reflect + ?Sized>(record: &T, filter: &[&str]) -> Result<String, Error> {
    let model = check_type(record)?;
    check_presence_of_fields(model, filter)?;

    Ok(delete_model(model, filter))
}

/// [`select`] over an already-resolved model.
pub fn select_model(model: &RecordModel, fields: &[&str]) -> Result<String, Error> {
    let table = model.table_name();

    let sql = if fields.is_empty() {
        clause::build_select(&table, &model.field_names())
    } else {
        check_presence_of_fields(model, fields)?;
        clause::build_select(&table, fields)
    };
    trace_statement(StatementKind::Select, &table, &sql);

    Ok(sql)
}

#[must_use]
pub fn insert_model(model: &RecordModel) -> String {
    let table = model.table_name();
    let sql = clause::build_insert(&table, &model.field_names());
    trace_statement(StatementKind::Insert, &table, &sql);

    sql
}

/// [`update`] over an already-resolved model.
pub fn update_model(
    model: &RecordModel,
    update: &[&str],
    filter: &[&str],
) -> Result<String, Error> {
    check_presence_of_fields(model, update)?;
    check_presence_of_fields(model, filter)?;

    let table = model.table_name();
    let sql = clause::build_update(&table, update, filter);
    trace_statement(StatementKind::Update, &table, &sql);

    Ok(sql)
}

#[must_use]
pub fn delete_model(model: &RecordModel, filter: &[&str]) -> String {
    let table = model.table_name();
    let sql = clause::build_delete(&table, filter);
    trace_statement(StatementKind::Delete, &table, &sql);

    sql
}

fn trace_statement(kind: StatementKind, table: &str, sql: &str) {
    trace!(target: "sqlgen", %kind, table, sql, "generated statement");
}
