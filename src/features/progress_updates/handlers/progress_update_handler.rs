use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::progress_updates::dtos::{
    CreateProgressUpdateDto, ProgressUpdateResponseDto,
};
use crate::features::progress_updates::services::ProgressUpdateService;

/// Record a new progress update
///
/// Failures are returned as plain text: 400 for invalid input, 500 when
/// the update could not be stored.
#[utoipa::path(
    post,
    path = "/api/progress-updates/create",
    request_body = CreateProgressUpdateDto,
    responses(
        (status = 200, description = "Progress update created", body = ProgressUpdateResponseDto),
        (status = 400, description = "Invalid request", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tag = "progress-updates"
)]
pub async fn create_progress_update(
    State(service): State<Arc<ProgressUpdateService>>,
    AppJson(dto): AppJson<CreateProgressUpdateDto>,
) -> Result<Json<ProgressUpdateResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let update = service
        .create_progress_update(
            dto.user_id,
            dto.template_type,
            dto.content,
            dto.learning_plan_id,
        )
        .await?;
    Ok(Json(update))
}

/// List progress updates of a user
///
/// Users without updates get an empty array.
#[utoipa::path(
    get,
    path = "/api/progress-updates/user/{userId}",
    params(
        ("userId" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Progress updates of the user, oldest first", body = Vec<ProgressUpdateResponseDto>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    ),
    tag = "progress-updates"
)]
pub async fn list_progress_updates_by_user(
    State(service): State<Arc<ProgressUpdateService>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProgressUpdateResponseDto>>> {
    let updates = service.list_by_user(&user_id).await?;
    Ok(Json(updates))
}
