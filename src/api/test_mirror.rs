//! Implements the `Mirror` trait using in-memory data.
//!
//! Note: this is compiled even in the "production" version of this app
//! so that we can run the whole app, top-to-bottom, without a remote
//! service (see `Mode`).

use crate::api::Mirror;
use crate::error::Result;
use crate::model::Document;
use std::sync::{Arc, Mutex, OnceLock};

static SHARED: OnceLock<Arc<Mutex<Vec<Document>>>> = OnceLock::new();

/// An implementation of the `Mirror` trait backed by a `Vec` instead of
/// a remote collection.
#[derive(Clone)]
pub(crate) struct TestMirror {
    documents: Arc<Mutex<Vec<Document>>>,
}

impl TestMirror {
    /// A mirror over process-wide shared state, used in test mode so
    /// that a push followed by a pull within one run round-trips.
    pub(crate) fn shared() -> Self {
        let documents = SHARED
            .get_or_init(|| Arc::new(Mutex::new(Vec::new())))
            .clone();
        Self { documents }
    }

    /// A mirror with its own empty state.
    pub(crate) fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a copy of the stored documents.
    pub(crate) fn documents(&self) -> Vec<Document> {
        self.lock().clone()
    }

    /// Replaces the stored documents.
    pub(crate) fn set_documents(&self, documents: Vec<Document>) {
        *self.lock() = documents;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Document>> {
        self.documents.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait::async_trait]
impl Mirror for TestMirror {
    async fn insert(&self, document: &Document) -> Result<()> {
        self.lock().push(document.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Document>> {
        Ok(self.documents())
    }
}
