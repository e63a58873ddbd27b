use serde::{Deserialize, Serialize};
use sm_validation::{Constraint, FieldDescriptor, Presence, RequestSchema};

/// Payload for creating an environment, either standalone or nested
/// inside a create-project request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnvironmentRequest {
    /// Environment name (required, non-empty)
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether this becomes the project's default environment
    #[serde(default)]
    pub is_default: Option<bool>,
}

impl RequestSchema for CreateEnvironmentRequest {
    fn field_descriptors() -> &'static [FieldDescriptor] {
        &[
            FieldDescriptor {
                field: "name",
                presence: Presence::Required,
                constraints: &[Constraint::IsString, Constraint::NotEmpty],
            },
            FieldDescriptor {
                field: "description",
                presence: Presence::Optional,
                constraints: &[Constraint::IsString],
            },
            FieldDescriptor {
                field: "isDefault",
                presence: Presence::Optional,
                constraints: &[Constraint::IsBoolean],
            },
        ]
    }
}
