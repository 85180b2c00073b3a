use std::error::Error as StdError;
use std::fmt;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

// ── MapError ──────────────────────────────────────────────────

/// Everything that can go wrong while turning a cursor document into `T`.
///
/// None of these are recovered from locally. A failed advance yields no value
/// and leaves the underlying cursor past the offending document.
#[derive(Debug)]
pub enum MapError {
    /// `next_value` was called with nothing left on the cursor.
    EndOfSequence,
    /// The mapper was handed a document it cannot accept. Signals a wiring
    /// mistake, e.g. a direct mapper on a cursor that does not pre-decode.
    InvalidArgument(String),
    /// The value carried by (or decoded from) a document is not the target type.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    /// The document could not be re-encoded to BSON bytes.
    Encoding(bson::error::Error),
    /// Opaque failure from the marshalling capability.
    Marshalling(BoxError),
    /// The native cursor failed while fetching the next document.
    Cursor(BoxError),
}

impl MapError {
    pub fn marshalling(e: impl Into<BoxError>) -> Self {
        Self::Marshalling(e.into())
    }

    pub fn cursor(e: impl Into<BoxError>) -> Self {
        Self::Cursor(e.into())
    }

    pub fn is_end_of_sequence(&self) -> bool {
        matches!(self, Self::EndOfSequence)
    }
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfSequence => write!(f, "no more documents on cursor"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "type mismatch: expected {expected}, found {found}")
            }
            Self::Encoding(e) => write!(f, "encoding error: {e}"),
            Self::Marshalling(e) => write!(f, "marshalling error: {e}"),
            Self::Cursor(e) => write!(f, "cursor error: {e}"),
        }
    }
}

impl StdError for MapError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Encoding(e) => Some(e),
            Self::Marshalling(e) | Self::Cursor(e) => Some(&**e as &(dyn StdError + 'static)),
            _ => None,
        }
    }
}

impl From<bson::error::Error> for MapError {
    fn from(e: bson::error::Error) -> Self {
        Self::Encoding(e)
    }
}
