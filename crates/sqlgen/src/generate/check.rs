use crate::{error::Error, model::record::RecordModel, traits::Reflect};

/// Resolve the record model behind `value`.
///
/// Accepts a record, or a reference (or other single indirection) to one.
pub fn check_type<T: Reflect + ?Sized>(_value: &T) -> Result<&'static RecordModel, Error> {
    T::kind().record().ok_or(Error::InvalidInputKind)
}

/// Ensure every requested name is a (lowercased) field of `model`.
///
/// Stops at the first unknown name.
pub fn check_presence_of_fields(model: &RecordModel, fields: &[&str]) -> Result<(), Error> {
    match fields.iter().copied().find(|given| !model.has_column(given)) {
        Some(missing) => Err(Error::field_not_found(model.name, missing)),
        None => Ok(()),
    }
}
