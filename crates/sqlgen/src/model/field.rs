///
/// FieldModel
/// Declared field metadata for one record field.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldModel {
    /// Field name exactly as declared (raw identifier prefix stripped).
    pub name: &'static str,
}

impl FieldModel {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Column name for this field.
    #[must_use]
    pub fn column(&self) -> String {
        self.name.to_lowercase()
    }
}
