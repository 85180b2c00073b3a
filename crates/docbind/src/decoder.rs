use std::any;
use std::error::Error as StdError;
use std::iter::Peekable;
use std::marker::PhantomData;

use bson::{Document, RawDocumentBuf};
use serde::de::DeserializeOwned;

use crate::cursor::NativeCursor;
use crate::document::ResultDocument;
use crate::error::MapError;

/// Decodes wire bytes into a [`ResultDocument`] that already carries its `T`.
///
/// The only producer of pre-decoded documents, and so the only source the
/// direct mapper can be pointed at.
pub struct PreDecoder<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> PreDecoder<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<ResultDocument, MapError> {
        let doc: Document = bson::deserialize_from_slice(bytes).map_err(MapError::marshalling)?;
        let value: T = bson::deserialize_from_slice(bytes).map_err(MapError::marshalling)?;
        tracing::trace!(target_type = any::type_name::<T>(), "pre-decoded document");
        Ok(ResultDocument::pre_decoded(doc, value))
    }
}

impl<T> Default for PreDecoder<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Cursor over raw BSON buffers that pre-decodes every document into `T`.
///
/// Pair with [`ResultMapperFactory::new_direct_mapper`](crate::ResultMapperFactory::new_direct_mapper).
pub struct DecodingCursor<I: Iterator, T> {
    inner: Peekable<I>,
    decoder: PreDecoder<T>,
}

impl<I, T> DecodingCursor<I, T>
where
    I: Iterator,
    T: DeserializeOwned + Send + 'static,
{
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
            decoder: PreDecoder::new(),
        }
    }
}

impl<I, E, T> NativeCursor for DecodingCursor<I, T>
where
    I: Iterator<Item = Result<RawDocumentBuf, E>>,
    E: StdError + Send + Sync + 'static,
    T: DeserializeOwned + Send + 'static,
{
    fn has_next(&mut self) -> bool {
        self.inner.peek().is_some()
    }

    fn next_document(&mut self) -> Result<ResultDocument, MapError> {
        match self.inner.next() {
            Some(Ok(raw)) => self.decoder.decode(raw.as_bytes()),
            Some(Err(e)) => Err(MapError::cursor(e)),
            None => Err(MapError::EndOfSequence),
        }
    }
}
