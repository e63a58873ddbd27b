//! Environment request entry points

use crate::{ApiResult, CreateEnvironmentRequest};

use serde_json::Value;
use sm_validation::RequestSchema;

/// Parse and validate a create-environment request body
pub fn parse_create_environment(body: &[u8]) -> ApiResult<CreateEnvironmentRequest> {
    let input: Value = serde_json::from_slice(body)?;
    let request = CreateEnvironmentRequest::validate(&input)?;

    Ok(request)
}

/// Validate an already-parsed create-environment record
pub fn validate_create_environment(input: &Value) -> ApiResult<CreateEnvironmentRequest> {
    Ok(CreateEnvironmentRequest::validate(input)?)
}
