use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::progress_updates::models::{NewProgressUpdate, ProgressUpdate};
use crate::features::progress_updates::repositories::ProgressUpdateRepository;

/// Vec-backed repository keeping insertion order
#[derive(Default)]
pub struct InMemoryProgressUpdateRepository {
    records: RwLock<Vec<ProgressUpdate>>,
}

impl InMemoryProgressUpdateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl ProgressUpdateRepository for InMemoryProgressUpdateRepository {
    async fn save(&self, update: NewProgressUpdate) -> Result<ProgressUpdate> {
        let record = ProgressUpdate {
            id: update.id.unwrap_or_else(Uuid::now_v7),
            user_id: update.user_id,
            template_type: update.template_type,
            content: update.content,
            learning_plan_id: update.learning_plan_id,
            created_at: Utc::now(),
        };

        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<ProgressUpdate>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Repository whose every call fails as if the database were down
pub struct UnavailableProgressUpdateRepository;

#[async_trait]
impl ProgressUpdateRepository for UnavailableProgressUpdateRepository {
    async fn save(&self, _update: NewProgressUpdate) -> Result<ProgressUpdate> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_user_id(&self, _user_id: &str) -> Result<Vec<ProgressUpdate>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_update(user_id: &str, content: &str) -> NewProgressUpdate {
        NewProgressUpdate {
            id: None,
            user_id: user_id.to_string(),
            template_type: "weekly".to_string(),
            content: content.to_string(),
            learning_plan_id: None,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_when_missing() {
        let repo = InMemoryProgressUpdateRepository::new();
        let first = repo.save(new_update("u1", "a")).await.unwrap();
        let second = repo.save(new_update("u1", "a")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_save_keeps_preassigned_id() {
        let repo = InMemoryProgressUpdateRepository::new();
        let id = Uuid::now_v7();
        let mut update = new_update("u1", "a");
        update.id = Some(id);

        let saved = repo.save(update).await.unwrap();
        assert_eq!(saved.id, id);
    }

    #[tokio::test]
    async fn test_find_by_user_id_filters_and_keeps_order() {
        let repo = InMemoryProgressUpdateRepository::new();
        repo.save(new_update("u1", "first")).await.unwrap();
        repo.save(new_update("u2", "other")).await.unwrap();
        repo.save(new_update("u1", "second")).await.unwrap();

        let found = repo.find_by_user_id("u1").await.unwrap();
        let contents: Vec<&str> = found.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);
        assert!(repo.find_by_user_id("nobody").await.unwrap().is_empty());
    }
}
