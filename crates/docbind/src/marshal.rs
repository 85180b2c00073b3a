use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::MapError;

/// Turns a BSON byte payload into a typed value.
///
/// `offset` is where the document starts within `bytes`. Implementations must
/// report failures through [`MapError::Marshalling`] (or any other variant
/// they see fit); the mappers forward them untouched.
pub trait Unmarshaller<T> {
    fn unmarshall(&self, bytes: &[u8], offset: usize) -> Result<T, MapError>;
}

impl<T, U: Unmarshaller<T> + ?Sized> Unmarshaller<T> for &U {
    fn unmarshall(&self, bytes: &[u8], offset: usize) -> Result<T, MapError> {
        (**self).unmarshall(bytes, offset)
    }
}

impl<T, U: Unmarshaller<T> + ?Sized> Unmarshaller<T> for Box<U> {
    fn unmarshall(&self, bytes: &[u8], offset: usize) -> Result<T, MapError> {
        (**self).unmarshall(bytes, offset)
    }
}

impl<T, U: Unmarshaller<T> + ?Sized> Unmarshaller<T> for Arc<U> {
    fn unmarshall(&self, bytes: &[u8], offset: usize) -> Result<T, MapError> {
        (**self).unmarshall(bytes, offset)
    }
}

/// Serde-backed unmarshaller for any `T: DeserializeOwned`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BsonUnmarshaller;

impl<T: DeserializeOwned> Unmarshaller<T> for BsonUnmarshaller {
    fn unmarshall(&self, bytes: &[u8], offset: usize) -> Result<T, MapError> {
        let payload = bytes.get(offset..).ok_or_else(|| {
            MapError::marshalling(format!(
                "offset {offset} out of bounds for {} byte payload",
                bytes.len()
            ))
        })?;
        bson::deserialize_from_slice(payload).map_err(MapError::marshalling)
    }
}
