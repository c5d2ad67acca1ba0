//! Field groups

use super::field::FormField;
use serde::{Deserialize, Serialize};

/// Direction a group lays its fields out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// An ordered batch of fields
#[derive(Debug, Clone, Default)]
pub struct FieldGroup {
    pub fields: Vec<FormField>,
    pub axis: Axis,
}

impl FieldGroup {
    pub fn new(fields: Vec<FormField>, axis: Axis) -> Self {
        Self { fields, axis }
    }

    pub fn horizontal(fields: Vec<FormField>) -> Self {
        Self::new(fields, Axis::Horizontal)
    }

    pub fn vertical(fields: Vec<FormField>) -> Self {
        Self::new(fields, Axis::Vertical)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
