//! Validation engine
//!
//! Runs a field's rules in declaration order and stops at the first failure.
//! Form-level aggregation lives on [`Form`](super::Form); this module holds
//! the pure per-field pass and the result types it produces.

use super::field::FormField;
use super::rule::{FieldLookup, RuleKind};
use crate::config::FormConfig;
use thiserror::Error;

/// The first rule a field violated, with its resolved message
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub rule: RuleKind,
    pub message: String,
}

/// Cosmetic instruction for the presentation layer
///
/// Hints never affect whether a form is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayHint {
    /// Show an empty error indicator on the field at this flattened index
    BlankError { index: usize },
}

/// A failure attributed to a field of a form
#[derive(Debug, Clone, PartialEq)]
pub struct FieldFailure {
    /// Position in the flattened field order
    pub index: usize,
    pub identifier: Option<String>,
    pub failure: ValidationFailure,
}

/// Outcome of validating every field of a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub failures: Vec<FieldFailure>,
    pub hints: Vec<DisplayHint>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_at(&self, index: usize) -> Option<&ValidationFailure> {
        self.failures
            .iter()
            .find(|f| f.index == index)
            .map(|f| &f.failure)
    }

    pub fn failure_for(&self, identifier: &str) -> Option<&ValidationFailure> {
        self.failures
            .iter()
            .find(|f| f.identifier.as_deref() == Some(identifier))
            .map(|f| &f.failure)
    }
}

/// Check `field` against its rules; `None` means every rule passed
///
/// An absent value is checked as the empty string.
pub fn validate_field<L: FieldLookup + ?Sized>(
    field: &FormField,
    lookup: &L,
    config: &FormConfig,
) -> Option<ValidationFailure> {
    let value = field.value().unwrap_or("");
    let rule = field.rules.iter().find(|rule| !rule.evaluate(value, lookup))?;
    let message = rule.message_for(field.label.as_deref(), lookup, config);

    tracing::debug!(
        field = field.identifier.as_deref().unwrap_or("<unnamed>"),
        rule = rule.kind.name(),
        "validation failed: {message}"
    );

    Some(ValidationFailure {
        rule: rule.kind.clone(),
        message,
    })
}
