use std::any;

use crate::cursor::NativeCursor;
use crate::error::MapError;
use crate::mapper::ResultMapper;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterState {
    Fresh,
    Iterating,
    Exhausted,
}

/// A lazy stream of typed values over a borrowed native cursor.
///
/// Each advance pulls exactly one document and runs it through the bound
/// [`ResultMapper`]. The iterator only borrows the cursor: it never closes
/// it, and position lives entirely in the cursor. Dropping the iterator
/// hands the cursor back to the caller, who is responsible for releasing it.
///
/// Not restartable. A tailing cursor makes this an unbounded sequence.
pub struct ResultIter<'c, C: ?Sized, T> {
    cursor: &'c mut C,
    mapper: ResultMapper<T>,
    state: IterState,
}

impl<'c, C, T> ResultIter<'c, C, T>
where
    C: NativeCursor + ?Sized,
    T: 'static,
{
    pub fn new(cursor: &'c mut C, mapper: ResultMapper<T>) -> Self {
        Self {
            cursor,
            mapper,
            state: IterState::Fresh,
        }
    }

    /// Whether the cursor has another document. Never consumes one.
    pub fn has_next(&mut self) -> bool {
        self.cursor.has_next()
    }

    /// Pull and map the next document.
    ///
    /// Asks the cursor on every call and fails with
    /// [`MapError::EndOfSequence`] when it reports nothing left. Any other
    /// error comes from the cursor or the mapper; the cursor has already
    /// moved past the document either way.
    pub fn next_value(&mut self) -> Result<T, MapError> {
        if !self.cursor.has_next() {
            self.exhaust();
            return Err(MapError::EndOfSequence);
        }
        self.pull()
    }

    /// `Exhausted` only means the cursor reported nothing left the last
    /// time it was asked. A tailing cursor that receives more documents
    /// moves the iterator back to `Iterating` on the next advance.
    pub fn state(&self) -> IterState {
        self.state
    }

    pub fn mapper(&self) -> &ResultMapper<T> {
        &self.mapper
    }

    fn pull(&mut self) -> Result<T, MapError> {
        self.state = IterState::Iterating;
        let doc = self.cursor.next_document()?;
        tracing::trace!(target_type = self.mapper.target(), "mapping document");
        self.mapper.map(doc)
    }

    fn exhaust(&mut self) {
        if self.state != IterState::Exhausted {
            tracing::trace!(target_type = any::type_name::<T>(), "result cursor exhausted");
            self.state = IterState::Exhausted;
        }
    }
}

impl<C, T> Iterator for ResultIter<'_, C, T>
where
    C: NativeCursor + ?Sized,
    T: 'static,
{
    type Item = Result<T, MapError>;

    /// Ends only when the cursor reports no more documents. Errors from
    /// the cursor or mapper are yielded as items, whatever their variant.
    fn next(&mut self) -> Option<Self::Item> {
        if !self.cursor.has_next() {
            self.exhaust();
            return None;
        }
        Some(self.pull())
    }
}
