//! Prepared SQL statement templates derived from the shape of Rust record
//! types.
//!
//! A record is any struct with named fields that implements [`Record`],
//! usually through `#[derive(Record)]`. The table name is the struct name
//! lowercased and the columns are its field names lowercased, in declaration
//! order. Values are never inlined; every predicate and value slot is a `?`
//! placeholder.
//!
//! ```
//! use sqlgen::Record;
//!
//! #[derive(Record)]
//! struct Person {
//!     id: u64,
//!     name: String,
//!     age: u32,
//! }
//!
//! # fn main() -> Result<(), sqlgen::Error> {
//! let p = Person { id: 1, name: "Umi".into(), age: 6 };
//!
//! assert_eq!(sqlgen::select(&p, &[])?, "select id, name, age from person");
//! assert_eq!(
//!     sqlgen::update(&p, &["name", "age"], &["id"])?,
//!     "update person set name=?, age=? where id=?",
//! );
//! assert_eq!(
//!     sqlgen::delete(&p, &["name", "age"]),
//!     "delete from person where name=? and age=?",
//! );
//! # Ok(())
//! # }
//! ```

extern crate self as sqlgen;

// public exports are one module level down
pub mod error;
pub mod generate;
pub mod model;
pub mod traits;

pub use error::{Error, ErrorKind};
pub use generate::{
    Request, StatementKind, delete, generate, insert, select, try_delete, update,
};
pub use traits::{Record, Reflect};

#[cfg(feature = "derive")]
pub use sqlgen_derive::Record;

///
/// Prelude
///
/// Record vocabulary plus the free generation functions.
///

pub mod prelude {
    pub use crate::{
        generate::{Request, StatementKind, delete, insert, select, try_delete, update},
        model::{field::FieldModel, kind::Kind, record::RecordModel},
        traits::{Record, Reflect},
    };
}
