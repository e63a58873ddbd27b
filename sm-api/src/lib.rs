pub mod api;

pub use api::{
    environments::{
        create_environment_request::CreateEnvironmentRequest,
        environments::{parse_create_environment, validate_create_environment},
    },
    error::ApiError,
    error::Result as ApiResult,
    error::{ApiErrorBody, ApiErrorResponse},
    projects::{
        create_project_request::CreateProjectRequest,
        projects::{parse_create_project, validate_create_project},
    },
};
