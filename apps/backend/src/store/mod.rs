//! Opaque document storage for in-progress matches.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::errors::domain::DomainError;

/// Whole-document store keyed by match id. Documents are serialized
/// `Match` JSON; the store never looks inside them.
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<String>, DomainError>;
    async fn put(&self, id: &str, document: String) -> Result<(), DomainError>;
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}

/// Process-local store; contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryMatchStore {
    docs: DashMap<String, String>,
}

impl MemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[async_trait]
impl MatchStore for MemoryMatchStore {
    async fn get(&self, id: &str) -> Result<Option<String>, DomainError> {
        Ok(self.docs.get(id).map(|doc| doc.value().clone()))
    }

    async fn put(&self, id: &str, document: String) -> Result<(), DomainError> {
        self.docs.insert(id.to_string(), document);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.docs.remove(id);
        Ok(())
    }
}
