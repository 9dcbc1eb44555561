use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request DTO for creating a progress update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressUpdateDto {
    /// Owner of the update
    #[validate(
        length(max = 255, message = "User ID must not exceed 255 characters"),
        custom(
            function = "crate::shared::validation::validate_not_blank",
            message = "User ID must not be blank"
        ),
        regex(
            path = "*crate::shared::validation::NO_NUL_REGEX",
            message = "User ID must not contain NUL characters"
        )
    )]
    pub user_id: String,

    /// Tag selecting how `content` is interpreted, e.g. "weekly"
    #[validate(
        length(min = 1, max = 100, message = "Template type must be 1-100 characters"),
        regex(
            path = "*crate::shared::validation::TEMPLATE_TYPE_REGEX",
            message = "Template type must start with a letter or digit and contain only letters, digits, hyphens and underscores"
        )
    )]
    pub template_type: String,

    /// Free text body of the update
    #[validate(
        length(max = 10000, message = "Content must not exceed 10000 characters"),
        regex(
            path = "*crate::shared::validation::NO_NUL_REGEX",
            message = "Content must not contain NUL characters"
        )
    )]
    pub content: String,

    /// Learning plan this update belongs to, if any
    #[validate(
        length(max = 255, message = "Learning plan ID must not exceed 255 characters"),
        regex(
            path = "*crate::shared::validation::NO_NUL_REGEX",
            message = "Learning plan ID must not contain NUL characters"
        )
    )]
    #[serde(default)]
    pub learning_plan_id: Option<String>,
}

/// Response DTO for a progress update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdateResponseDto {
    pub id: Uuid,
    pub user_id: String,
    pub template_type: String,
    pub content: String,
    pub learning_plan_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(user_id: &str, template_type: &str) -> CreateProgressUpdateDto {
        CreateProgressUpdateDto {
            user_id: user_id.to_string(),
            template_type: template_type.to_string(),
            content: "Lost 2kg".to_string(),
            learning_plan_id: None,
        }
    }

    #[test]
    fn test_deserialize_camel_case_without_learning_plan() {
        let parsed: CreateProgressUpdateDto = serde_json::from_value(json!({
            "userId": "u1",
            "templateType": "weekly",
            "content": "Lost 2kg"
        }))
        .unwrap();

        assert_eq!(parsed.user_id, "u1");
        assert_eq!(parsed.template_type, "weekly");
        assert_eq!(parsed.content, "Lost 2kg");
        assert_eq!(parsed.learning_plan_id, None);
    }

    #[test]
    fn test_deserialize_rejects_missing_user_id() {
        let parsed = serde_json::from_value::<CreateProgressUpdateDto>(json!({
            "templateType": "weekly",
            "content": "Lost 2kg"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_accepts_valid_input() {
        assert!(dto("u1", "weekly").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_user_id() {
        let errors = dto("  ", "weekly").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));
        assert!(errors.to_string().contains("User ID must not be blank"));
    }

    #[test]
    fn test_validate_rejects_bad_template_type() {
        assert!(dto("u1", "").validate().is_err());
        assert!(dto("u1", "weekly summary").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nul_characters() {
        let errors = dto("u\u{0}1", "weekly").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("user_id"));

        assert!(dto("u1", "week\u{0}ly").validate().is_err());

        let mut nul_content = dto("u1", "weekly");
        nul_content.content = "Lost\u{0}2kg".to_string();
        let errors = nul_content.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));

        let mut nul_plan = dto("u1", "weekly");
        nul_plan.learning_plan_id = Some("lp\u{0}1".to_string());
        let errors = nul_plan.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("learning_plan_id"));
    }

    #[test]
    fn test_validate_rejects_oversized_content() {
        let mut oversized = dto("u1", "weekly");
        oversized.content = "x".repeat(10001);
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = ProgressUpdateResponseDto {
            id: Uuid::now_v7(),
            user_id: "u1".to_string(),
            template_type: "weekly".to_string(),
            content: "Lost 2kg".to_string(),
            learning_plan_id: Some("lp1".to_string()),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["userId"], "u1");
        assert_eq!(value["templateType"], "weekly");
        assert_eq!(value["learningPlanId"], "lp1");
        assert_eq!(value["id"], response.id.to_string());
        assert!(value.get("createdAt").is_some());
    }
}
