use std::any::{self, Any};
use std::fmt;
use std::marker::PhantomData;

use bson::RawDocumentBuf;

use crate::config::{DecodingMode, MapperConfig};
use crate::document::ResultDocument;
use crate::error::MapError;
use crate::marshal::Unmarshaller;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapperKind {
    Generic,
    Direct,
}

// ── ResultMapper ────────────────────────────────────────────

/// Converts one cursor document into one `T`.
///
/// Built by [`ResultMapperFactory`]; the variant is fixed at construction.
pub enum ResultMapper<T> {
    Generic(GenericMapper<T>),
    Direct(DirectMapper<T>),
}

impl<T: 'static> ResultMapper<T> {
    pub fn map(&self, doc: ResultDocument) -> Result<T, MapError> {
        match self {
            Self::Generic(m) => m.map(doc),
            Self::Direct(m) => m.map(doc),
        }
    }

    pub fn kind(&self) -> MapperKind {
        match self {
            Self::Generic(_) => MapperKind::Generic,
            Self::Direct(_) => MapperKind::Direct,
        }
    }

    /// Name of the target type, as reported by [`std::any::type_name`].
    pub fn target(&self) -> &'static str {
        any::type_name::<T>()
    }
}

impl<T: 'static> fmt::Debug for ResultMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultMapper")
            .field("kind", &self.kind())
            .field("target", &self.target())
            .finish()
    }
}

// ── Generic: re-encode, then unmarshall ─────────────────────

pub struct GenericMapper<T> {
    unmarshaller: Box<dyn Unmarshaller<T> + Send>,
}

impl<T> GenericMapper<T> {
    fn map(&self, doc: ResultDocument) -> Result<T, MapError> {
        // The encode buffer is owned by this call and dropped on every path out.
        let raw = RawDocumentBuf::try_from(doc.document())?;
        self.unmarshaller.unmarshall(raw.as_bytes(), 0)
    }
}

// ── Direct: take the pre-decoded value ──────────────────────

pub struct DirectMapper<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T: 'static> DirectMapper<T> {
    fn map(&self, doc: ResultDocument) -> Result<T, MapError> {
        let Some((value, found)) = doc.take_embedded() else {
            tracing::warn!(
                target_type = any::type_name::<T>(),
                "direct mapper received a plain document"
            );
            return Err(MapError::InvalidArgument(
                "this mapper can only map pre-decoded documents".into(),
            ));
        };
        downcast(value, found)
    }
}

fn downcast<T: 'static>(value: Box<dyn Any + Send>, found: &'static str) -> Result<T, MapError> {
    value
        .downcast::<T>()
        .map(|v| *v)
        .map_err(|_| MapError::TypeMismatch {
            expected: any::type_name::<T>(),
            found,
        })
}

// ── Factory ─────────────────────────────────────────────────

/// The one place a mapper variant gets chosen.
pub struct ResultMapperFactory;

impl ResultMapperFactory {
    /// Mapper that re-encodes every document and decodes it with `unmarshaller`.
    pub fn new_mapper<T, U>(unmarshaller: U) -> ResultMapper<T>
    where
        T: 'static,
        U: Unmarshaller<T> + Send + 'static,
    {
        tracing::debug!(target_type = any::type_name::<T>(), "building generic result mapper");
        ResultMapper::Generic(GenericMapper {
            unmarshaller: Box::new(unmarshaller),
        })
    }

    /// Mapper for documents that already carry a decoded `T`.
    ///
    /// Only valid on cursors whose documents come from a
    /// [`PreDecoder`](crate::PreDecoder); anything else fails with
    /// [`MapError::InvalidArgument`].
    pub fn new_direct_mapper<T: 'static>() -> ResultMapper<T> {
        tracing::debug!(target_type = any::type_name::<T>(), "building direct result mapper");
        ResultMapper::Direct(DirectMapper {
            _target: PhantomData,
        })
    }

    /// Choose the variant from `config`. `unmarshaller` is dropped when the
    /// configured mode does not need it.
    pub fn from_config<T, U>(config: &MapperConfig, unmarshaller: U) -> ResultMapper<T>
    where
        T: 'static,
        U: Unmarshaller<T> + Send + 'static,
    {
        match config.mode {
            DecodingMode::Reencode => Self::new_mapper(unmarshaller),
            DecodingMode::PreDecoded => Self::new_direct_mapper(),
        }
    }
}
