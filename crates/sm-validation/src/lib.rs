pub mod constraint;
pub mod context;
pub mod error;
pub mod field_descriptor;
pub mod field_error;
pub mod field_path;
pub mod presence;
pub mod schema;

pub use constraint::Constraint;
pub use context::ValidationContext;
pub use error::{Result, ValidationErrors};
pub use field_descriptor::FieldDescriptor;
pub use field_error::FieldValidationError;
pub use field_path::{FieldPath, PathSegment};
pub use presence::Presence;
pub use schema::RequestSchema;
