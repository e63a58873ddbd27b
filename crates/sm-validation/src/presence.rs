/// Explicit presence flag for a field descriptor.
///
/// Kept separate from the constraint list so the contract stays portable:
/// whether a field may be omitted is declared, not inferred from an
/// optional-type sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Omitting the field is a validation error
    Required,
    /// Omitting the field (or sending JSON null) is valid
    Optional,
}

impl Presence {
    pub fn is_required(&self) -> bool {
        matches!(self, Presence::Required)
    }
}
