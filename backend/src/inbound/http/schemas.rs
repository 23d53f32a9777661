//! OpenAPI schema definitions and shared response bodies.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! error schema mirrors the body rendered by [`super::error`].

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Error`] as rendered on the wire.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message returned to clients.
    #[schema(example = "City not found")]
    error: String,
}

/// Body returned when an entity is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    /// Store-generated identifier.
    #[schema(example = 1)]
    pub id: i32,
}

/// Body returned by successful updates and deletions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation text.
    #[schema(example = "Country updated successfully")]
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn error_schema_describes_the_error_field() {
        let schema_json =
            serde_json::to_string(&ErrorSchema::schema()).expect("schema serialises to JSON");
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("\"error\""));
    }

    #[test]
    fn created_response_is_a_bare_id() {
        let body = serde_json::to_value(CreatedResponse { id: 5 }).expect("serialise");
        assert_eq!(body, serde_json::json!({"id": 5}));
    }
}
