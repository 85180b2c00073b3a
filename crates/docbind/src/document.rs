use std::any::{self, Any};
use std::fmt;

use bson::Document;

/// A value decoded ahead of time and attached to its source document.
struct Embedded {
    value: Box<dyn Any + Send>,
    type_name: &'static str,
}

/// One record as handed out by a native cursor.
///
/// Always carries the dynamic [`Document`]. Documents produced by a
/// [`PreDecoder`](crate::PreDecoder) additionally carry the typed value that
/// was built from the same bytes, which is what the direct mapper extracts.
pub struct ResultDocument {
    doc: Document,
    embedded: Option<Embedded>,
}

impl ResultDocument {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            embedded: None,
        }
    }

    /// Pair `doc` with an already-decoded `value`.
    pub fn pre_decoded<T: Any + Send>(doc: Document, value: T) -> Self {
        Self {
            doc,
            embedded: Some(Embedded {
                value: Box::new(value),
                type_name: any::type_name::<T>(),
            }),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    pub fn is_pre_decoded(&self) -> bool {
        self.embedded.is_some()
    }

    /// Type name of the embedded value, if any.
    pub fn embedded_type(&self) -> Option<&'static str> {
        self.embedded.as_ref().map(|e| e.type_name)
    }

    /// Move the embedded value out, tagged with its type name.
    pub(crate) fn take_embedded(self) -> Option<(Box<dyn Any + Send>, &'static str)> {
        self.embedded.map(|e| (e.value, e.type_name))
    }
}

impl From<Document> for ResultDocument {
    fn from(doc: Document) -> Self {
        Self::new(doc)
    }
}

impl fmt::Debug for ResultDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultDocument")
            .field("doc", &self.doc)
            .field("embedded", &self.embedded_type())
            .finish()
    }
}
