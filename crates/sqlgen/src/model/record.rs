use crate::model::field::FieldModel;

///
/// RecordModel
/// Static, derive-generated description of one record type.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RecordModel {
    /// Type name as declared; used verbatim in error messages.
    pub name: &'static str,
    /// Ordered field list (declaration order is column order).
    pub fields: &'static [FieldModel],
}

impl RecordModel {
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [FieldModel]) -> Self {
        Self { name, fields }
    }

    /// Table the record maps to: the type name lowercased.
    #[must_use]
    pub fn table_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Lowercased field names in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(FieldModel::column).collect()
    }

    /// True if `column` matches one of the lowercased field names exactly.
    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.fields.iter().any(|field| field.column() == column)
    }
}
