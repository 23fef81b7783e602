use crate::{
    error::Error,
    generate::{check_type, delete_model, insert_model, select_model, update_model},
    traits::Reflect,
};
use std::fmt::{self, Display};

///
/// StatementKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StatementKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl StatementKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Request
///
/// One statement to generate, independent of the record it is applied to.
/// An empty `Select` field list means every field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Request {
    Select { fields: Vec<String> },
    Insert,
    Update { update: Vec<String>, filter: Vec<String> },
    Delete { filter: Vec<String> },
}

impl Request {
    pub fn select<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Select {
            fields: collect(fields),
        }
    }

    #[must_use]
    pub const fn insert() -> Self {
        Self::Insert
    }

    pub fn update<I, J, S, T>(update: I, filter: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self::Update {
            update: collect(update),
            filter: collect(filter),
        }
    }

    pub fn delete<I, S>(filter: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Delete {
            filter: collect(filter),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> StatementKind {
        match self {
            Self::Select { .. } => StatementKind::Select,
            Self::Insert => StatementKind::Insert,
            Self::Update { .. } => StatementKind::Update,
            Self::Delete { .. } => StatementKind::Delete,
        }
    }
}

/// Generate the statement described by `request` for `record`.
///
/// The record kind is always checked. Field presence is checked for
/// `Select` and `Update` only, matching [`delete`](crate::generate::delete).
pub fn generate<T: Reflect + ?Sized>(record: &T, request: &Request) -> Result<String, Error> {
    let model = check_type(record)?;

    match request {
        Request::Select { fields } => select_model(model, &as_strs(fields)),
        Request::Insert => Ok(insert_model(model)),
        Request::Update { update, filter } => {
            update_model(model, &as_strs(update), &as_strs(filter))
        }
        Request::Delete { filter } => Ok(delete_model(model, &as_strs(filter))),
    }
}

fn collect<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

fn as_strs(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}
