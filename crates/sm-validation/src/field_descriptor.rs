use crate::{Constraint, Presence};

/// One row of a schema's constraint table.
///
/// A schema is a mapping from field name to an ordered list of constraints,
/// evaluated by [`crate::ValidationContext::check_fields`] in declaration
/// order so that error lists are deterministic.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Field name as it appears on the wire
    pub field: &'static str,
    pub presence: Presence,
    /// Constraints applied when the field is present, in evaluation order
    pub constraints: &'static [Constraint],
}
