pub mod create_environment_request;
pub mod environments;
