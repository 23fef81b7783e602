//! Clause assembly.
//!
//! Pure string formatting over already-resolved table and column names.
//! Nothing here consults a record model or validates anything. Table and
//! column identifiers are always case-folded to lowercase.

const PLACEHOLDER: &str = "?";

/// `select <f1>, <f2>, ... from <table>`
///
/// Columns are emitted in the given order.
#[must_use]
pub fn build_select(table: &str, fields: &[impl AsRef<str>]) -> String {
    format!("select {} from {}", columns(fields), table.to_lowercase())
}

/// `insert into <table> (<f1>, ...) values (?, ...)`, one placeholder per
/// column.
#[must_use]
pub fn build_insert(table: &str, fields: &[impl AsRef<str>]) -> String {
    let placeholders = vec![PLACEHOLDER; fields.len()].join(", ");

    format!(
        "insert into {} ({}) values ({placeholders})",
        table.to_lowercase(),
        columns(fields)
    )
}

/// `<f1>=? and <f2>=? and ...`
#[must_use]
pub fn build_filter_clause(fields: &[impl AsRef<str>]) -> String {
    prepared_fields(fields).join(" and ")
}

/// `update <table> set <s1>=?, ... where <f1>=? and ...`
#[must_use]
pub fn build_update(
    table: &str,
    set_fields: &[impl AsRef<str>],
    filter_fields: &[impl AsRef<str>],
) -> String {
    format!(
        "update {} set {} where {}",
        table.to_lowercase(),
        prepared_fields(set_fields).join(", "),
        build_filter_clause(filter_fields)
    )
}

/// `delete from <table> where <f1>=? and ...`
#[must_use]
pub fn build_delete(table: &str, filter_fields: &[impl AsRef<str>]) -> String {
    format!(
        "delete from {} where {}",
        table.to_lowercase(),
        build_filter_clause(filter_fields)
    )
}

// Render each field as a lowercased `field=?` pair.
fn prepared_fields(fields: &[impl AsRef<str>]) -> Vec<String> {
    fields
        .iter()
        .map(|field| format!("{}={PLACEHOLDER}", field.as_ref().to_lowercase()))
        .collect()
}

// Lowercased, comma-separated column list.
fn columns(fields: &[impl AsRef<str>]) -> String {
    fields
        .iter()
        .map(|field| field.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}
