//! Runtime shape model.
//!
//! `RecordModel` and `FieldModel` are the static schema descriptors emitted
//! by `#[derive(Record)]`; `Kind` is the value-level shape consulted before
//! any statement is generated.

pub mod field;
pub mod kind;
pub mod record;
