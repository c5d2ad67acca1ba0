//! Validation rules and their predicates

use super::field::FormField;
use crate::config::FormConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}$").expect("valid regex")
});

/// Resolves field references for match rules
pub trait FieldLookup {
    /// Find a field by identifier. With duplicates, the last one wins.
    fn find_field(&self, identifier: &str) -> Option<&FormField>;
}

impl FieldLookup for [FormField] {
    fn find_field(&self, identifier: &str) -> Option<&FormField> {
        self.iter()
            .rev()
            .find(|f| f.identifier.as_deref() == Some(identifier))
    }
}

impl FieldLookup for Vec<FormField> {
    fn find_field(&self, identifier: &str) -> Option<&FormField> {
        self.as_slice().find_field(identifier)
    }
}

/// The predicate a rule applies, with its typed parameter
///
/// The boolean on `Required`, `Email` and `Number` enables the rule; a
/// disabled rule always passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Required(bool),
    Email(bool),
    Number(bool),
    MinValue(f64),
    MaxValue(f64),
    MinLength(usize),
    MaxLength(usize),
    /// Identifier of the field whose value must be matched
    MatchWith(String),
}

impl RuleKind {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required(_) => "required",
            RuleKind::Email(_) => "email",
            RuleKind::Number(_) => "number",
            RuleKind::MinValue(_) => "min_value",
            RuleKind::MaxValue(_) => "max_value",
            RuleKind::MinLength(_) => "min_length",
            RuleKind::MaxLength(_) => "max_length",
            RuleKind::MatchWith(_) => "match_with",
        }
    }
}

/// A rule attached to a field, with an optional message override
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    pub fn required() -> Self {
        Self::new(RuleKind::Required(true))
    }

    pub fn email() -> Self {
        Self::new(RuleKind::Email(true))
    }

    pub fn number() -> Self {
        Self::new(RuleKind::Number(true))
    }

    pub fn min_value(bound: f64) -> Self {
        Self::new(RuleKind::MinValue(bound))
    }

    pub fn max_value(bound: f64) -> Self {
        Self::new(RuleKind::MaxValue(bound))
    }

    pub fn min_length(bound: usize) -> Self {
        Self::new(RuleKind::MinLength(bound))
    }

    pub fn max_length(bound: usize) -> Self {
        Self::new(RuleKind::MaxLength(bound))
    }

    pub fn match_with(identifier: impl Into<String>) -> Self {
        Self::new(RuleKind::MatchWith(identifier.into()))
    }

    /// Replace the default message for this rule
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check `value` against this rule
    pub fn evaluate<L: FieldLookup + ?Sized>(&self, value: &str, lookup: &L) -> bool {
        match &self.kind {
            RuleKind::Required(enabled) => !enabled || !value.trim().is_empty(),
            RuleKind::Email(enabled) => !enabled || is_valid_email(value),
            RuleKind::Number(enabled) => !enabled || parse_number(value).is_some(),
            RuleKind::MinValue(bound) => parse_number(value).is_some_and(|n| n >= *bound),
            RuleKind::MaxValue(bound) => parse_number(value).is_some_and(|n| n <= *bound),
            RuleKind::MinLength(bound) => trimmed_len(value) >= *bound,
            RuleKind::MaxLength(bound) => trimmed_len(value) <= *bound,
            RuleKind::MatchWith(identifier) => match lookup.find_field(identifier) {
                Some(other) => value == other.value().unwrap_or(""),
                None => {
                    tracing::debug!("match_with target '{identifier}' not found, rule passes");
                    true
                }
            },
        }
    }

    /// The message reported when this rule fails for a field labelled `label`
    pub fn message_for<L: FieldLookup + ?Sized>(
        &self,
        label: Option<&str>,
        lookup: &L,
        config: &FormConfig,
    ) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }

        let label = label.unwrap_or(&config.fallback_label);
        match &self.kind {
            RuleKind::Required(_) => format!("{label} is required"),
            RuleKind::Email(_) => "Invalid email address".to_string(),
            RuleKind::Number(_) => "Invalid number".to_string(),
            RuleKind::MinValue(bound) => format!("Minimum {bound} is required"),
            RuleKind::MaxValue(bound) => format!("Maximum {bound} is allowed"),
            RuleKind::MinLength(bound) => format!("Minimum {bound} characters required"),
            RuleKind::MaxLength(bound) => format!("Maximum {bound} characters allowed"),
            RuleKind::MatchWith(identifier) => {
                let other = lookup
                    .find_field(identifier)
                    .and_then(|f| f.label.as_deref())
                    .unwrap_or(&config.fallback_match_label);
                format!("{label} is not matching with {other}")
            }
        }
    }
}

fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Decimal float, or hexadecimal float such as `0x1.8p3`
fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().or_else(|| parse_hex_float(value))
}

fn parse_hex_float(value: &str) -> Option<f64> {
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let rest = rest
        .strip_prefix("0x")
        .or_else(|| rest.strip_prefix("0X"))?;
    let (mantissa, exponent) = match rest.find(['p', 'P']) {
        Some(at) => (&rest[..at], rest[at + 1..].parse::<i32>().ok()?),
        None => (rest, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut number = 0.0_f64;
    for c in whole.chars() {
        number = number * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for c in fraction.chars() {
        number += f64::from(c.to_digit(16)?) * scale;
        scale /= 16.0;
    }
    let number = number * 2.0_f64.powi(exponent);
    Some(if negative { -number } else { number })
}

/// User-perceived characters of the trimmed value
fn trimmed_len(value: &str) -> usize {
    value.trim().graphemes(true).count()
}
