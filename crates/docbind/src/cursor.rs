use std::error::Error as StdError;
use std::iter::Peekable;

use crate::document::ResultDocument;
use crate::error::MapError;

/// A forward-only driver cursor.
///
/// `has_next` may block to fetch the next batch but must not consume a
/// document. `next_document` advances irreversibly, even when it fails.
pub trait NativeCursor {
    fn has_next(&mut self) -> bool;
    fn next_document(&mut self) -> Result<ResultDocument, MapError>;
}

impl<C: NativeCursor + ?Sized> NativeCursor for &mut C {
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next_document(&mut self) -> Result<ResultDocument, MapError> {
        (**self).next_document()
    }
}

impl<C: NativeCursor + ?Sized> NativeCursor for Box<C> {
    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next_document(&mut self) -> Result<ResultDocument, MapError> {
        (**self).next_document()
    }
}

/// Cursor over any fallible Rust iterator, such as a storage engine's
/// streaming scan.
///
/// `has_next` pulls one element ahead and keeps it until `next_document`.
/// A pending source error counts as "has next" so that it surfaces from the
/// advance as [`MapError::Cursor`].
pub struct IterCursor<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.peekable(),
        }
    }
}

impl<I, D, E> NativeCursor for IterCursor<I>
where
    I: Iterator<Item = Result<D, E>>,
    D: Into<ResultDocument>,
    E: StdError + Send + Sync + 'static,
{
    fn has_next(&mut self) -> bool {
        self.inner.peek().is_some()
    }

    fn next_document(&mut self) -> Result<ResultDocument, MapError> {
        match self.inner.next() {
            Some(Ok(doc)) => Ok(doc.into()),
            Some(Err(e)) => Err(MapError::cursor(e)),
            None => Err(MapError::EndOfSequence),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;

    use bson::{Document, doc};

    use super::*;

    #[derive(Debug)]
    struct Disconnected;

    impl fmt::Display for Disconnected {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "connection reset")
        }
    }

    impl StdError for Disconnected {}

    #[test]
    fn has_next_does_not_consume() {
        let docs: Vec<Result<Document, Disconnected>> = vec![Ok(doc! { "i": 0 })];
        let mut cursor = IterCursor::new(docs.into_iter());
        assert!(cursor.has_next());
        assert!(cursor.has_next());
        assert_eq!(cursor.next_document().unwrap().into_document(), doc! { "i": 0 });
        assert!(!cursor.has_next());
    }

    #[test]
    fn source_error_surfaces_on_advance() {
        let docs: Vec<Result<Document, Disconnected>> =
            vec![Err(Disconnected), Ok(doc! { "i": 1 })];
        let mut cursor = IterCursor::new(docs.into_iter());
        assert!(cursor.has_next());
        let err = cursor.next_document().unwrap_err();
        assert_eq!(err.to_string(), "cursor error: connection reset");
        assert_eq!(cursor.next_document().unwrap().into_document(), doc! { "i": 1 });
    }

    #[test]
    fn drained_cursor_reports_end() {
        let mut cursor = IterCursor::new(std::iter::empty::<Result<Document, Disconnected>>());
        assert!(!cursor.has_next());
        assert!(cursor.next_document().unwrap_err().is_end_of_sequence());
    }

    fn take_one<C: NativeCursor>(mut cursor: C) -> Option<Document> {
        cursor
            .has_next()
            .then(|| cursor.next_document().unwrap().into_document())
    }

    #[test]
    fn boxed_and_borrowed_cursors_delegate() {
        let docs: Vec<Result<Document, Disconnected>> =
            vec![Ok(doc! { "i": 0 }), Ok(doc! { "i": 1 })];
        let mut boxed: Box<dyn NativeCursor> = Box::new(IterCursor::new(docs.into_iter()));

        assert_eq!(take_one(&mut boxed), Some(doc! { "i": 0 }));
        assert_eq!(take_one(&mut *boxed), Some(doc! { "i": 1 }));
        assert_eq!(take_one(boxed), None);
    }
}
