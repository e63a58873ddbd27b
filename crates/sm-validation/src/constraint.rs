use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// An atomic, named validation rule.
///
/// Constraints are pure predicates over a JSON value. Presence is handled
/// separately by [`crate::Presence`]; `Required` exists here so that a
/// missing required field can be reported under a stable constraint code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The field must be present in the record
    Required,
    /// The value must be a JSON string
    IsString,
    /// The value must be a string with non-whitespace content
    NotEmpty,
    /// The value must be a genuine JSON boolean (no coercion)
    IsBoolean,
    /// The value must be a JSON array
    IsArray,
    /// The value must be a JSON object
    IsObject,
    /// The checked record must decode into the declared typed shape.
    /// Only reported when a schema's constraint table disagrees with
    /// its struct definition.
    Shape,
}

impl Constraint {
    /// Machine-readable constraint code as it appears on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::IsString => "isString",
            Constraint::NotEmpty => "isNotEmpty",
            Constraint::IsBoolean => "isBoolean",
            Constraint::IsArray => "isArray",
            Constraint::IsObject => "isObject",
            Constraint::Shape => "shape",
        }
    }

    /// Check the constraint against a value that is present in the record
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        match self {
            Constraint::Required => !value.is_null(),
            Constraint::IsString => value.is_string(),
            Constraint::NotEmpty => match value.as_str() {
                Some(text) => !text.trim().is_empty(),
                None => false,
            },
            Constraint::IsBoolean => value.is_boolean(),
            Constraint::IsArray => value.is_array(),
            Constraint::IsObject => value.is_object(),
            Constraint::Shape => true,
        }
    }

    /// Human-readable message fragment, appended after the field path
    pub fn message_suffix(&self) -> &'static str {
        match self {
            Constraint::Required => "is required",
            Constraint::IsString => "must be a string",
            Constraint::NotEmpty => "should not be empty",
            Constraint::IsBoolean => "must be a boolean value",
            Constraint::IsArray => "must be an array",
            Constraint::IsObject => "must be an object",
            Constraint::Shape => "did not match the expected shape",
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Serializes as the wire code from [`Constraint::code`]
impl Serialize for Constraint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}
