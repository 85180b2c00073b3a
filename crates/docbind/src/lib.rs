//! Typed result mapping over forward-only BSON document cursors.
//!
//! A [`ResultMapper`] turns one cursor document into one `T`, either by
//! re-encoding it and handing the bytes to an [`Unmarshaller`], or by taking a
//! value that a [`PreDecoder`] already attached to it. A [`ResultIter`] borrows
//! a [`NativeCursor`] and applies a mapper lazily, one document per advance.
//!
//! ```rust,ignore
//! use docbind::{BsonUnmarshaller, IterCursor, ResultIter, ResultMapperFactory};
//!
//! let mut cursor = IterCursor::new(driver_rows);
//! let mapper = ResultMapperFactory::new_mapper::<Account, _>(BsonUnmarshaller);
//! for account in ResultIter::new(&mut cursor, mapper) {
//!     println!("{:?}", account?);
//! }
//! // `cursor` is still ours to close.
//! ```

mod config;
mod cursor;
mod decoder;
mod document;
mod error;
mod iter;
mod mapper;
mod marshal;

pub use bson::{Document, RawDocumentBuf};
pub use config::{DecodingMode, MapperConfig};
pub use cursor::{IterCursor, NativeCursor};
pub use decoder::{DecodingCursor, PreDecoder};
pub use document::ResultDocument;
pub use error::MapError;
pub use iter::{IterState, ResultIter};
pub use mapper::{DirectMapper, GenericMapper, MapperKind, ResultMapper, ResultMapperFactory};
pub use marshal::{BsonUnmarshaller, Unmarshaller};
