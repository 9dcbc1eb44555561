use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::progress_updates::handlers;
use crate::features::progress_updates::services::ProgressUpdateService;

/// Create routes for the progress updates feature
pub fn routes(service: Arc<ProgressUpdateService>) -> Router {
    Router::new()
        .route(
            "/api/progress-updates/create",
            post(handlers::create_progress_update),
        )
        .route(
            "/api/progress-updates/user/{userId}",
            get(handlers::list_progress_updates_by_user),
        )
        .with_state(service)
}
