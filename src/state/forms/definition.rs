//! Declarative form definitions
//!
//! A form can be described in JSON and turned into a [`Form`]:
//!
//! ```json
//! {
//!   "title": "Sign up",
//!   "entries": [
//!     { "field": { "identifier": "email", "label": "Email",
//!                  "rules": [ { "kind": { "required": true } },
//!                             { "kind": { "email": true } } ] } },
//!     { "group": { "axis": "horizontal", "fields": [ ... ] } }
//!   ]
//! }
//! ```

use super::field::{FieldKind, FormField, ReturnKey};
use super::form_state::{Form, FormEntry};
use super::group::{Axis, FieldGroup};
use super::rule::Rule;
use crate::config::FormConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefinition {
    pub identifier: Option<String>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub rules: Vec<Rule>,
    pub kind: FieldKind,
    pub multiline: bool,
    pub secure: bool,
    pub options: Vec<String>,
    pub return_key: ReturnKey,
}

impl FieldDefinition {
    pub fn into_field(self) -> FormField {
        let mut builder = FormField::builder()
            .kind(self.kind)
            .secure(self.secure)
            .multiline(self.multiline)
            .options(self.options)
            .return_key(self.return_key)
            .rules(self.rules);
        if let Some(identifier) = self.identifier {
            builder = builder.identifier(identifier);
        }
        if let Some(label) = self.label {
            builder = builder.label(label);
        }
        if let Some(value) = self.value {
            builder = builder.value(value);
        }
        builder.build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupDefinition {
    pub axis: Axis,
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryDefinition {
    Field(FieldDefinition),
    Group(GroupDefinition),
}

impl From<EntryDefinition> for FormEntry {
    fn from(entry: EntryDefinition) -> Self {
        match entry {
            EntryDefinition::Field(field) => FormEntry::Field(field.into_field()),
            EntryDefinition::Group(group) => FormEntry::Group(FieldGroup::new(
                group
                    .fields
                    .into_iter()
                    .map(FieldDefinition::into_field)
                    .collect(),
                group.axis,
            )),
        }
    }
}

/// Serializable description of a whole form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefinition {
    pub title: Option<String>,
    pub entries: Vec<EntryDefinition>,
}

impl FormDefinition {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build the form described by this definition
    pub fn into_form(self, config: FormConfig) -> Form {
        let entries = self.entries.into_iter().map(FormEntry::from).collect();
        let form = Form::new(entries).with_config(config);
        match self.title {
            Some(title) => form.with_title(title),
            None => form,
        }
    }
}
