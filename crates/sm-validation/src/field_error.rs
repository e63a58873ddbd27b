use crate::{Constraint, FieldPath};

use std::fmt;

use serde::Serialize;

/// A single failed constraint.
///
/// This is the only error shape validation produces: the path of the
/// offending value (including array indices for nested elements), the
/// constraint that failed, and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    pub path: String,
    pub constraint: Constraint,
    pub message: String,
}

impl FieldValidationError {
    /// Build the error for a constraint failing at `path`.
    ///
    /// The message is `"<path> <suffix>"`, or just the suffix for the
    /// root path (a non-object request body has no field to name).
    pub fn at(path: &FieldPath, constraint: Constraint) -> Self {
        let message = if path.is_root() {
            format!("request body {}", constraint.message_suffix())
        } else {
            format!("{} {}", path, constraint.message_suffix())
        };

        Self {
            path: path.to_string(),
            constraint,
            message,
        }
    }
}

impl fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.constraint)
    }
}
