use crate::{
    Constraint, FieldDescriptor, FieldPath, FieldValidationError, Result as ValidationResult,
    ValidationContext, ValidationErrors,
};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A declarative request schema: a constraint table plus the typed value
/// the input decodes into once every constraint holds.
///
/// Implementors declare their table in [`field_descriptors`] and recurse
/// into nested schemas in [`check_nested`]; the engine owns evaluation
/// order, error paths, and the final typed decode.
///
/// [`field_descriptors`]: RequestSchema::field_descriptors
/// [`check_nested`]: RequestSchema::check_nested
pub trait RequestSchema: DeserializeOwned + Sized {
    /// The constraint table, in field evaluation order
    fn field_descriptors() -> &'static [FieldDescriptor];

    /// Validate nested schemas (array-of-DTO fields). Default: none.
    fn check_nested(_record: &Map<String, Value>, _ctx: &mut ValidationContext) {}

    /// Apply this schema at the context's current path, accumulating
    /// failures. Non-object input is a single `IsObject` failure; the
    /// field table is not evaluated against a non-record.
    fn check(input: &Value, ctx: &mut ValidationContext) {
        match input.as_object() {
            Some(record) => {
                ctx.check_fields(record, Self::field_descriptors());
                Self::check_nested(record, ctx);
            }
            None => ctx.push(Constraint::IsObject),
        }
    }

    /// Validate an untyped input record.
    ///
    /// Pure and total: the same input always yields the same result, and
    /// the result is either the fully-validated typed value or a
    /// non-empty error list, never both and never a panic. The typed
    /// decode cannot fail once the constraint table holds; a schema whose
    /// table disagrees with its struct reports a root `Shape` error.
    fn validate(input: &Value) -> ValidationResult<Self> {
        let mut ctx = ValidationContext::root();
        Self::check(input, &mut ctx);
        ctx.finish()?;

        serde_json::from_value(input.clone()).map_err(|_| {
            ValidationErrors::single(FieldValidationError::at(
                &FieldPath::root(),
                Constraint::Shape,
            ))
        })
    }
}
