#![allow(dead_code)]

use std::collections::VecDeque;

use bson::{Document, RawDocumentBuf, doc};
use docbind::{MapError, NativeCursor, ResultDocument};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub active: bool,
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// 5 seed records.
pub fn seed_docs() -> Vec<Document> {
    vec![
        doc! { "_id": "acct-1", "name": "Acme Corp", "revenue": 50000.0, "active": true },
        doc! { "_id": "acct-2", "name": "Globex", "revenue": 80000.0, "active": true },
        doc! { "_id": "acct-3", "name": "Initech", "revenue": 12000.0, "active": false },
        doc! { "_id": "acct-4", "name": "Umbrella", "revenue": 95000.0, "active": true },
        doc! { "_id": "acct-5", "name": "Stark Industries", "revenue": 200000.0, "active": false },
    ]
}

pub fn seed_raw() -> Vec<RawDocumentBuf> {
    seed_docs()
        .iter()
        .map(|d| RawDocumentBuf::try_from(d).unwrap())
        .collect()
}

/// Cursor double that counts every call made against it.
#[derive(Debug, Default)]
pub struct MockCursor {
    docs: VecDeque<ResultDocument>,
    pub has_next_calls: usize,
    pub next_calls: usize,
}

impl MockCursor {
    pub fn new(docs: impl IntoIterator<Item = ResultDocument>) -> Self {
        Self {
            docs: docs.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn plain(docs: Vec<Document>) -> Self {
        Self::new(docs.into_iter().map(ResultDocument::from))
    }

    pub fn remaining(&self) -> usize {
        self.docs.len()
    }
}

impl NativeCursor for MockCursor {
    fn has_next(&mut self) -> bool {
        self.has_next_calls += 1;
        !self.docs.is_empty()
    }

    fn next_document(&mut self) -> Result<ResultDocument, MapError> {
        self.next_calls += 1;
        self.docs.pop_front().ok_or(MapError::EndOfSequence)
    }
}
