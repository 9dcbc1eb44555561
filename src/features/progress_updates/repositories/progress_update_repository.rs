use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::progress_updates::models::{NewProgressUpdate, ProgressUpdate};

/// Persistence for progress updates
#[async_trait]
pub trait ProgressUpdateRepository: Send + Sync {
    /// Insert a new record, assigning a UUID v7 when none is set
    async fn save(&self, update: NewProgressUpdate) -> Result<ProgressUpdate>;

    /// All records owned by `user_id`, oldest first
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<ProgressUpdate>>;
}

/// PostgreSQL-backed repository
pub struct PgProgressUpdateRepository {
    pool: PgPool,
}

impl PgProgressUpdateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProgressUpdateRepository for PgProgressUpdateRepository {
    async fn save(&self, update: NewProgressUpdate) -> Result<ProgressUpdate> {
        let id = update.id.unwrap_or_else(Uuid::now_v7);

        let saved: ProgressUpdate = sqlx::query_as(
            r#"
            INSERT INTO progress_updates (id, user_id, template_type, content, learning_plan_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, template_type, content, learning_plan_id, created_at
            "#,
        )
        .bind(id)
        .bind(&update.user_id)
        .bind(&update.template_type)
        .bind(&update.content)
        .bind(&update.learning_plan_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save progress update: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(saved)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<ProgressUpdate>> {
        let updates: Vec<ProgressUpdate> = sqlx::query_as(
            r#"
            SELECT id, user_id, template_type, content, learning_plan_id, created_at
            FROM progress_updates
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(updates)
    }
}
