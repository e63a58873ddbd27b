use crate::FieldValidationError;

use std::result::Result as StdResult;

use serde::Serialize;
use thiserror::Error;

/// The failed side of a validation: a non-empty, ordered error list.
///
/// Order follows the schema's field declaration order, then element order
/// for nested arrays, so the same input always produces the same list.
/// Constructors enforce non-emptiness; an empty list is a success, not an
/// empty failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("validation failed with {} error(s): {}", .entries.len(), summary(.entries))]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: Vec<FieldValidationError>,
}

impl ValidationErrors {
    /// Wrap an error list; `None` when the list is empty
    pub fn from_entries(entries: Vec<FieldValidationError>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn single(entry: FieldValidationError) -> Self {
        Self {
            entries: vec![entry],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<FieldValidationError> {
        self.entries
    }

    /// True if any entry points at the given path
    pub fn has_path(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }
}

fn summary(entries: &[FieldValidationError]) -> String {
    entries
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = StdResult<T, ValidationErrors>;
