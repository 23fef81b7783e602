//! `#[derive(Record)]` for sqlgen.
//!
//! Emits the static `RecordModel` for a struct with named fields, plus the
//! `Reflect` and `Record` impls that expose it.

use proc_macro::TokenStream;

mod record;

/// Derive `Reflect` and `Record` for a struct with named fields.
///
/// The table name is the struct name lowercased and the columns are the
/// field names lowercased, in declaration order.
///
/// `#[sqlgen(crate = "path")]` changes the path generated code uses to reach
/// the runtime crate (default `::sqlgen`).
#[proc_macro_derive(Record, attributes(sqlgen))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
