use crate::model::record::RecordModel;

///
/// Kind
///
/// Lossy runtime shape of a value passed to the generator. Only `Record`,
/// and a single `Ref` wrapping a `Record`, can produce statements.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    // Scalar primitives
    Bool,
    Char,
    Float,
    Int,
    Text,
    Uint,
    Unit,

    // Containers
    Option(Box<Self>),
    List(Box<Self>),
    Map { key: Box<Self>, value: Box<Self> },

    /// Pointer-like indirection (`&T`, `Box<T>`, `Arc<T>`, ...).
    Ref(Box<Self>),

    /// Struct with named fields described by a static model.
    Record(&'static RecordModel),
}

impl Kind {
    /// Resolve the record model behind this kind, unwrapping at most one
    /// level of indirection.
    #[must_use]
    pub fn record(&self) -> Option<&'static RecordModel> {
        match self {
            Self::Record(model) => Some(*model),
            Self::Ref(inner) => match inner.as_ref() {
                Self::Record(model) => Some(*model),
                _ => None,
            },
            _ => None,
        }
    }
}
