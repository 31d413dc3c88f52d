//! In-memory idea store
//!
//! Data is lost on restart. All mutations go through the write lock, so
//! concurrent requests cannot interleave inside an operation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{IdeaStore, StoreError};
use crate::models::{Idea, IdeaDraft};

/// Process-memory store. Clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdeaStore {
    ideas: Arc<RwLock<Vec<Idea>>>,
}

impl MemoryIdeaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored ideas.
    pub async fn len(&self) -> usize {
        self.ideas.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.ideas.read().await.is_empty()
    }
}

#[async_trait]
impl IdeaStore for MemoryIdeaStore {
    async fn create(&self, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let idea = Idea {
            id: Uuid::new_v4(),
            title: draft.title.as_str().to_owned(),
            description: draft.description.as_str().to_owned(),
            created_at: Utc::now(),
        };

        // Newest first
        self.ideas.write().await.insert(0, idea.clone());
        tracing::debug!(id = %idea.id, "idea created in memory");
        Ok(idea)
    }

    async fn list(&self) -> Result<Vec<Idea>, StoreError> {
        Ok(self.ideas.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Idea, StoreError> {
        self.ideas
            .read()
            .await
            .iter()
            .find(|idea| idea.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn update(&self, id: Uuid, draft: IdeaDraft) -> Result<Idea, StoreError> {
        let mut ideas = self.ideas.write().await;
        let idea = ideas
            .iter_mut()
            .find(|idea| idea.id == id)
            .ok_or(StoreError::NotFound { id })?;

        idea.title = draft.title.as_str().to_owned();
        idea.description = draft.description.as_str().to_owned();
        tracing::debug!(%id, "idea updated in memory");
        Ok(idea.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut ideas = self.ideas.write().await;
        let pos = ideas
            .iter()
            .position(|idea| idea.id == id)
            .ok_or(StoreError::NotFound { id })?;

        ideas.remove(pos);
        tracing::debug!(%id, "idea deleted from memory");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
