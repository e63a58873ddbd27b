pub mod environments;
pub mod error;
pub mod projects;
