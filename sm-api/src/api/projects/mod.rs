pub mod create_project_request;
pub mod projects;
