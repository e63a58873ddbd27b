//! Request API error types
//!
//! These errors are designed to produce consistent JSON error bodies;
//! the surrounding transport owns status-line and header concerns.

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;
use sm_validation::{FieldValidationError, ValidationErrors};
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and per-field failures
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field-level failures, in schema declaration order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldValidationError>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed schema validation (400)
    #[error("Validation failed: {errors} {location}")]
    Validation {
        errors: ValidationErrors,
        location: ErrorLocation,
    },

    /// Request body was not parseable JSON (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Status code the transport should attach to this error
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => 400,
        }
    }

    /// Build the serializable response body
    pub fn into_response(self) -> ApiErrorResponse {
        // Log the error with location for debugging
        log::error!("{}", self);

        let body = match self {
            ApiError::Validation { errors, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message: format!("Request validation failed with {} error(s)", errors.len()),
                fields: errors.into_entries(),
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                fields: Vec::new(),
            },
        };

        ApiErrorResponse { error: body }
    }
}

/// Convert schema validation failures to API errors
impl From<ValidationErrors> for ApiError {
    #[track_caller]
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert JSON parse errors to API errors
impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Malformed JSON body: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
