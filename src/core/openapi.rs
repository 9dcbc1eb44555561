use utoipa::{Modify, OpenApi};

use crate::features::progress_updates::{
    dtos as progress_updates_dtos, handlers as progress_updates_handlers,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Progress updates
        progress_updates_handlers::create_progress_update,
        progress_updates_handlers::list_progress_updates_by_user,
    ),
    components(
        schemas(
            progress_updates_dtos::CreateProgressUpdateDto,
            progress_updates_dtos::ProgressUpdateResponseDto,
        )
    ),
    tags(
        (name = "progress-updates", description = "User progress updates tied to learning plans"),
    ),
    info(
        title = "CookBook Progress API",
        version = "0.1.0",
        description = "API documentation for CookBook progress updates",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
