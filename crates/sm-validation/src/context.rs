use crate::{
    Constraint, FieldDescriptor, FieldPath, FieldValidationError, Result as ValidationResult,
    ValidationErrors,
};

use serde_json::{Map, Value};

/// Accumulating evaluator for one validation pass.
///
/// Failures never stop the pass: every field in the table is checked and
/// every nested element is visited, so the caller gets the full error list
/// in one round trip. Within a single field the constraint list
/// short-circuits at the first failure (a value that is not a string is
/// not additionally reported as empty).
#[derive(Debug, Default)]
pub struct ValidationContext {
    path: FieldPath,
    errors: Vec<FieldValidationError>,
}

impl ValidationContext {
    /// Fresh context positioned at the record root
    pub fn root() -> Self {
        Self::default()
    }

    /// Current position inside the input record
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record a failure at the current path
    pub fn push(&mut self, constraint: Constraint) {
        self.errors
            .push(FieldValidationError::at(&self.path, constraint));
    }

    /// Record a failure for a field under the current path
    pub fn push_field(&mut self, field: &str, constraint: Constraint) {
        self.errors
            .push(FieldValidationError::at(&self.path.field(field), constraint));
    }

    /// Evaluate a constraint table against an input record.
    ///
    /// Fields are checked in declaration order. An absent required field
    /// reports `Required` and nothing else; an absent optional field is
    /// skipped. JSON `null` counts as absent for optional fields (the
    /// wire contract lets clients send null instead of omitting), while a
    /// required field set to null runs its constraint list so the type
    /// rule reports.
    pub fn check_fields(&mut self, record: &Map<String, Value>, table: &[FieldDescriptor]) {
        for descriptor in table {
            match record.get(descriptor.field) {
                None => {
                    if descriptor.presence.is_required() {
                        self.push_field(descriptor.field, Constraint::Required);
                    }
                }
                Some(Value::Null) if !descriptor.presence.is_required() => {}
                Some(value) => {
                    for constraint in descriptor.constraints {
                        if !constraint.is_satisfied_by(value) {
                            self.push_field(descriptor.field, *constraint);
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Visit every element of an array field, extending the path with
    /// `field[index]` for the duration of the closure.
    pub fn check_elements<F>(&mut self, field: &str, items: &[Value], mut check: F)
    where
        F: FnMut(&Value, &mut Self),
    {
        let parent = self.path.clone();
        for (index, item) in items.iter().enumerate() {
            self.path = parent.field(field).index(index);
            check(item, self);
        }
        self.path = parent;
    }

    /// Close the pass: `Err` iff any failure was recorded
    pub fn finish(self) -> ValidationResult<()> {
        match ValidationErrors::from_entries(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}
