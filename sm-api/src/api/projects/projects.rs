//! Project request entry points
//!
//! Transport-free counterparts of POST /api/v1/projects body handling:
//! parse the raw body into an untyped record, validate it, and hand the
//! typed request to the project-creation use case.

use crate::{ApiResult, CreateProjectRequest};

use serde_json::Value;
use sm_validation::RequestSchema;

// =============================================================================
// Body parsing
// =============================================================================

/// Parse and validate a create-project request body.
///
/// Malformed JSON maps to `BadRequest`; schema failures map to
/// `Validation` with the full ordered error list.
pub fn parse_create_project(body: &[u8]) -> ApiResult<CreateProjectRequest> {
    let input: Value = serde_json::from_slice(body)?;
    let request = CreateProjectRequest::validate(&input)?;

    Ok(request)
}

/// Validate an already-parsed create-project record
pub fn validate_create_project(input: &Value) -> ApiResult<CreateProjectRequest> {
    Ok(CreateProjectRequest::validate(input)?)
}
