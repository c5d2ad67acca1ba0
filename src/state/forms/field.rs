//! Form field model

use super::rule::Rule;
use super::validation::ValidationFailure;
use crate::error::{FormError, Result};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How the label is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Label drawn above the input
    Labeled,
    /// Label used as placeholder text
    #[default]
    Plain,
}

/// What the return key does on this field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnKey {
    /// Not yet assigned; the form picks `Next` or `Done`
    #[default]
    Default,
    Next,
    Done,
}

/// Error display state of a field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldState {
    #[default]
    Clear,
    /// The failure from the last validation, rule and message
    Error(ValidationFailure),
}

/// A single labelled input with its value and validation rules
#[derive(Debug, Clone, Default)]
pub struct FormField {
    pub identifier: Option<String>,
    pub label: Option<String>,
    value: Option<String>,
    pub rules: Vec<Rule>,
    state: FieldState,
    pub kind: FieldKind,
    pub multiline: bool,
    pub secure: bool,
    /// Choices for picker-backed fields
    pub options: Vec<String>,
    pub return_key: ReturnKey,
}

impl FormField {
    pub fn builder() -> FormFieldBuilder {
        FormFieldBuilder::default()
    }

    /// Current value, `None` when the input holds nothing
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Store `value` exactly as given
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.get_or_insert_with(String::new).push(c);
    }

    /// Remove the last user-perceived character from the field value
    pub fn pop_char(&mut self) {
        if let Some(value) = &mut self.value {
            let keep = value
                .grapheme_indices(true)
                .next_back()
                .map_or(0, |(at, _)| at);
            value.truncate(keep);
            if value.is_empty() {
                self.value = None;
            }
        }
    }

    /// Set the value to the option at `index`
    pub fn select_option(&mut self, index: usize) -> Result<()> {
        let option = self
            .options
            .get(index)
            .ok_or(FormError::OptionOutOfRange {
                option: index,
                count: self.options.len(),
            })?
            .clone();
        self.value = Some(option);
        Ok(())
    }

    /// Index of the current value among the options
    pub fn selected_option(&self) -> Option<usize> {
        let value = self.value()?;
        self.options.iter().position(|o| o == value)
    }

    pub fn is_picker(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Last failed validation, if it still stands
    pub fn error(&self) -> Option<&ValidationFailure> {
        match &self.state {
            FieldState::Clear => None,
            FieldState::Error(failure) => Some(failure),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error().map(|failure| failure.message.as_str())
    }

    pub fn set_error(&mut self, failure: ValidationFailure) {
        self.state = FieldState::Error(failure);
    }

    pub fn clear_error(&mut self) {
        self.state = FieldState::Clear;
    }

    /// Value as it should be shown, masked for secure fields
    pub fn display_value(&self) -> String {
        let value = self.value().unwrap_or("");
        if self.secure {
            "•".repeat(value.graphemes(true).count())
        } else {
            value.to_string()
        }
    }
}

/// Step-by-step construction of a [`FormField`]
#[derive(Debug, Default)]
pub struct FormFieldBuilder {
    field: FormField,
}

impl FormFieldBuilder {
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.field.identifier = Some(identifier.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.field.value = Some(value.into());
        self
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.field.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.field.rules.extend(rules);
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.field.kind = kind;
        self
    }

    /// Ignored on secure fields
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.field.multiline = multiline && !self.field.secure;
        self
    }

    /// Secure entry turns multiline off
    pub fn secure(mut self, secure: bool) -> Self {
        self.field.secure = secure;
        if secure {
            self.field.multiline = false;
        }
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.field.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn return_key(mut self, return_key: ReturnKey) -> Self {
        self.field.return_key = return_key;
        self
    }

    pub fn build(self) -> FormField {
        self.field
    }
}
