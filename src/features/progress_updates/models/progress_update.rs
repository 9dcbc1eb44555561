use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::progress_updates::dtos::ProgressUpdateResponseDto;

/// Database model for progress update
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ProgressUpdate {
    pub id: Uuid,
    pub user_id: String,
    pub template_type: String,
    pub content: String,
    pub learning_plan_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A progress update that has not been persisted yet.
///
/// When `id` is `None` the repository assigns one on save.
#[derive(Debug, Clone)]
pub struct NewProgressUpdate {
    pub id: Option<Uuid>,
    pub user_id: String,
    pub template_type: String,
    pub content: String,
    pub learning_plan_id: Option<String>,
}

impl From<ProgressUpdate> for ProgressUpdateResponseDto {
    fn from(p: ProgressUpdate) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            template_type: p.template_type,
            content: p.content,
            learning_plan_id: p.learning_plan_id,
            created_at: p.created_at,
        }
    }
}
