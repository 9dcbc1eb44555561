use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::progress_updates::dtos::ProgressUpdateResponseDto;
use crate::features::progress_updates::models::NewProgressUpdate;
use crate::features::progress_updates::repositories::ProgressUpdateRepository;

/// Service for recording and listing user progress updates
pub struct ProgressUpdateService {
    repository: Arc<dyn ProgressUpdateRepository>,
}

impl ProgressUpdateService {
    pub fn new(repository: Arc<dyn ProgressUpdateRepository>) -> Self {
        Self { repository }
    }

    /// Create and persist a new progress update.
    ///
    /// A blank `learning_plan_id` is stored as absent.
    pub async fn create_progress_update(
        &self,
        user_id: String,
        template_type: String,
        content: String,
        learning_plan_id: Option<String>,
    ) -> Result<ProgressUpdateResponseDto> {
        if user_id.trim().is_empty() {
            return Err(AppError::Validation(
                "User ID must not be blank".to_string(),
            ));
        }

        let has_nul = [&user_id, &template_type, &content]
            .into_iter()
            .chain(learning_plan_id.as_ref())
            .any(|field| field.contains('\0'));
        if has_nul {
            return Err(AppError::Validation(
                "Progress update fields must not contain NUL characters".to_string(),
            ));
        }

        let learning_plan_id = learning_plan_id.filter(|id| !id.trim().is_empty());

        let update = self
            .repository
            .save(NewProgressUpdate {
                id: None,
                user_id,
                template_type,
                content,
                learning_plan_id,
            })
            .await?;

        tracing::info!(
            "Progress update created: id={}, user_id={}, template_type={}",
            update.id,
            update.user_id,
            update.template_type
        );

        Ok(update.into())
    }

    /// List every progress update of a user, oldest first
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<ProgressUpdateResponseDto>> {
        let updates = self.repository.find_by_user_id(user_id).await?;

        tracing::debug!(
            "Listed progress updates: user_id={}, count={}",
            user_id,
            updates.len()
        );

        Ok(updates
            .into_iter()
            .map(ProgressUpdateResponseDto::from)
            .collect())
    }
}
