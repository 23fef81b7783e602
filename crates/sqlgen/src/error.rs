use thiserror::Error as ThisError;

///
/// Error
///
/// Validation failures raised while generating a statement. Messages are
/// stable; callers may match on the rendered text.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("you must provide a struct value or pointer")]
    InvalidInputKind,

    #[error("{record} does not have a field called \"{field}\"")]
    FieldNotFound { record: &'static str, field: String },
}

impl Error {
    pub(crate) fn field_not_found(record: &'static str, field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            record,
            field: field.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInputKind => ErrorKind::InvalidInputKind,
            Self::FieldNotFound { .. } => ErrorKind::FieldNotFound,
        }
    }
}

///
/// ErrorKind
/// Fieldless error taxonomy for callers that only branch on the class.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// The value handed to the generator is not a record or a reference to one.
    InvalidInputKind,

    /// A requested field is not declared on the record.
    FieldNotFound,
}
