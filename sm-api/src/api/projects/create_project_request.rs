use crate::CreateEnvironmentRequest;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sm_validation::{
    Constraint, FieldDescriptor, Presence, RequestSchema, ValidationContext,
};

/// Payload for creating a project.
///
/// Environments may be created inline; each element is validated against
/// [`CreateEnvironmentRequest`] and reports under `environments[<index>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name (required, non-empty)
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the project's private key is stored server-side (required,
    /// a genuine boolean; "true"/1 are rejected)
    pub store_private_key: bool,

    /// Environments to create alongside the project
    #[serde(default)]
    pub environments: Option<Vec<CreateEnvironmentRequest>>,
}

impl RequestSchema for CreateProjectRequest {
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
                field: "storePrivateKey",
                presence: Presence::Required,
                constraints: &[Constraint::IsBoolean],
            },
            FieldDescriptor {
                field: "environments",
                presence: Presence::Optional,
                constraints: &[Constraint::IsArray],
            },
        ]
    }

    fn check_nested(record: &Map<String, Value>, ctx: &mut ValidationContext) {
        if let Some(Value::Array(items)) = record.get("environments") {
            ctx.check_elements("environments", items, CreateEnvironmentRequest::check);
        }
    }
}
