//! Form state: ordered fields and groups, validation and navigation

use super::events::{FormObserver, ReturnAction};
use super::field::{FormField, ReturnKey};
use super::group::FieldGroup;
use super::rule::{FieldLookup, RuleKind};
use super::validation::{self, DisplayHint, FieldFailure, ValidationFailure, ValidationReport};
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A top-level form entry
#[derive(Debug, Clone)]
pub enum FormEntry {
    Field(FormField),
    Group(FieldGroup),
}

impl From<FormField> for FormEntry {
    fn from(field: FormField) -> Self {
        FormEntry::Field(field)
    }
}

impl From<FieldGroup> for FormEntry {
    fn from(group: FieldGroup) -> Self {
        FormEntry::Group(group)
    }
}

fn flatten(entries: &[FormEntry]) -> impl Iterator<Item = &FormField> {
    entries.iter().flat_map(|entry| match entry {
        FormEntry::Field(field) => std::slice::from_ref(field).iter(),
        FormEntry::Group(group) => group.fields.iter(),
    })
}

fn flatten_mut(entries: &mut [FormEntry]) -> impl Iterator<Item = &mut FormField> {
    entries.iter_mut().flat_map(|entry| match entry {
        FormEntry::Field(field) => std::slice::from_mut(field).iter_mut(),
        FormEntry::Group(group) => group.fields.iter_mut(),
    })
}

/// An ordered collection of fields and groups
///
/// Fields are addressed by their position in the flattened order (groups
/// expanded in place) or by identifier. Identifiers should be unique; when
/// they are not, lookups by identifier resolve to the last field carrying it.
pub struct Form {
    pub title: Option<String>,
    entries: Vec<FormEntry>,
    config: FormConfig,
    focused: Option<usize>,
    observer: Option<Box<dyn FormObserver>>,
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("title", &self.title)
            .field("entries", &self.entries)
            .field("config", &self.config)
            .field("focused", &self.focused)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Form {
    /// Build a form; return keys left at `Default` become `Next`, or `Done`
    /// on the last field
    pub fn new(entries: Vec<FormEntry>) -> Self {
        let mut form = Self {
            title: None,
            entries,
            config: FormConfig::default(),
            focused: None,
            observer: None,
        };
        form.assign_return_keys();
        form.warn_duplicate_identifiers();
        form
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn FormObserver>) {
        self.observer = Some(observer);
    }

    fn assign_return_keys(&mut self) {
        let count = self.field_count();
        for (index, field) in flatten_mut(&mut self.entries).enumerate() {
            if field.return_key == ReturnKey::Default {
                field.return_key = if index + 1 == count {
                    ReturnKey::Done
                } else {
                    ReturnKey::Next
                };
            }
        }
    }

    fn warn_duplicate_identifiers(&self) {
        let mut seen = HashSet::new();
        for identifier in self.fields().filter_map(|f| f.identifier.as_deref()) {
            if !seen.insert(identifier) {
                tracing::warn!("Duplicate field identifier '{identifier}', last one wins");
            }
        }
    }

    pub fn entries(&self) -> &[FormEntry] {
        &self.entries
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// All fields in order, groups expanded
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        flatten(&self.entries)
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut FormField> {
        flatten_mut(&mut self.entries)
    }

    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    pub fn field_at(&self, index: usize) -> Option<&FormField> {
        self.fields().nth(index)
    }

    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut FormField> {
        self.fields_mut().nth(index)
    }

    /// Field with this identifier (the last one, if duplicated)
    pub fn field(&self, identifier: &str) -> Option<&FormField> {
        self.find_field(identifier)
    }

    /// Flattened index of the field with this identifier
    pub fn index_of(&self, identifier: &str) -> Option<usize> {
        self.fields()
            .enumerate()
            .filter(|(_, f)| f.identifier.as_deref() == Some(identifier))
            .map(|(index, _)| index)
            .last()
    }

    // --- Values ---

    /// Snapshot of every identified field's value, absent values as `""`
    pub fn field_values(&self) -> HashMap<String, String> {
        let mut values = HashMap::new();
        for field in self.fields() {
            if let Some(identifier) = &field.identifier {
                values.insert(
                    identifier.clone(),
                    field.value().unwrap_or_default().to_string(),
                );
            }
        }
        values
    }

    pub fn field_value(&self, identifier: &str) -> Option<String> {
        self.field_values().remove(identifier)
    }

    /// Set the value of the field with this identifier
    pub fn set_value(&mut self, identifier: &str, value: impl Into<String>) -> Result<()> {
        let index = self
            .index_of(identifier)
            .ok_or_else(|| FormError::UnknownField(identifier.to_string()))?;
        self.set_value_at(index, value)
    }

    pub fn set_value_at(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.field_at_mut(index)
            .ok_or(FormError::NoFieldAt(index))?
            .set_value(value);
        self.notify_value_changed(index);
        Ok(())
    }

    pub fn clear_value_at(&mut self, index: usize) -> Result<()> {
        self.field_at_mut(index)
            .ok_or(FormError::NoFieldAt(index))?
            .clear_value();
        self.notify_value_changed(index);
        Ok(())
    }

    /// Pick option `option` of the picker-backed field at `index`
    pub fn select_option(&mut self, index: usize, option: usize) -> Result<()> {
        self.field_at_mut(index)
            .ok_or(FormError::NoFieldAt(index))?
            .select_option(option)?;
        self.notify_value_changed(index);
        Ok(())
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some(index) = self.focused else { return };
        if let Some(field) = self.field_at_mut(index) {
            field.push_char(c);
            self.notify_value_changed(index);
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        let Some(index) = self.focused else { return };
        if let Some(field) = self.field_at_mut(index) {
            field.pop_char();
            self.notify_value_changed(index);
        }
    }

    fn notify_value_changed(&mut self, index: usize) {
        if let (Some(observer), Some(field)) =
            (self.observer.as_mut(), flatten(&self.entries).nth(index))
        {
            observer.on_value_changed(index, field);
        }
    }

    // --- Validation ---

    /// Validate one field, recording the outcome on it
    ///
    /// A failure is stored as the field's error; a pass clears any stored
    /// error.
    pub fn validate_field(&mut self, index: usize) -> Result<Option<ValidationFailure>> {
        let field = self.field_at(index).ok_or(FormError::NoFieldAt(index))?;
        let failure = validation::validate_field(field, &*self, &self.config);

        if let Some(field) = self.field_at_mut(index) {
            match &failure {
                Some(failure) => field.set_error(failure.clone()),
                None => field.clear_error(),
            }
        }
        Ok(failure)
    }

    /// Validate every field; true when none failed
    pub fn validate_form(&mut self) -> bool {
        self.validate_form_report().is_valid()
    }

    /// Validate every field without stopping at failures
    ///
    /// Each field's error state is updated. A match failure inside a group
    /// adds a blank-error hint for each sibling that passed.
    pub fn validate_form_report(&mut self) -> ValidationReport {
        let mut report = ValidationReport::default();
        let this: &Form = self;

        let mut index = 0;
        for entry in &this.entries {
            match entry {
                FormEntry::Field(field) => {
                    if let Some(failure) = validation::validate_field(field, this, &this.config) {
                        report.failures.push(FieldFailure {
                            index,
                            identifier: field.identifier.clone(),
                            failure,
                        });
                    }
                    index += 1;
                }
                FormEntry::Group(group) => {
                    let start = report.failures.len();
                    let first = index;
                    for field in &group.fields {
                        if let Some(failure) =
                            validation::validate_field(field, this, &this.config)
                        {
                            report.failures.push(FieldFailure {
                                index,
                                identifier: field.identifier.clone(),
                                failure,
                            });
                        }
                        index += 1;
                    }
                    report
                        .hints
                        .extend(sibling_hints(&report.failures[start..], first..index));
                }
            }
        }

        for (position, field) in flatten_mut(&mut self.entries).enumerate() {
            match report.failure_at(position) {
                Some(failure) => field.set_error(failure.clone()),
                None => field.clear_error(),
            }
        }

        if let Some(observer) = self.observer.as_mut() {
            for hint in &report.hints {
                observer.on_display_hint(hint);
            }
        }

        tracing::info!(
            fields = index,
            failed = report.failures.len(),
            "validated form {}",
            self.title.as_deref().unwrap_or("")
        );
        report
    }

    // --- Navigation ---

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.focused.and_then(|index| self.field_at(index))
    }

    pub fn focus(&mut self, index: usize) -> Result<()> {
        let field = flatten(&self.entries)
            .nth(index)
            .ok_or(FormError::NoFieldAt(index))?;
        self.focused = Some(index);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_focus(index, field);
        }
        Ok(())
    }

    /// Move focus forward, wrapping to the first field
    pub fn focus_next(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let next = match self.focused {
            Some(current) => (current + 1) % count,
            None => 0,
        };
        let _ = self.focus(next);
    }

    /// Move focus backward, wrapping to the last field
    pub fn focus_prev(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let prev = match self.focused {
            Some(0) | None => count - 1,
            Some(current) => current - 1,
        };
        let _ = self.focus(prev);
    }

    /// Act on the return key for the focused field
    pub fn handle_return(&mut self) -> ReturnAction {
        let Some(index) = self.focused else {
            return ReturnAction::Ignored;
        };
        let Some(field) = flatten(&self.entries).nth(index) else {
            return ReturnAction::Ignored;
        };

        if field.multiline {
            self.input_char('\n');
            return ReturnAction::Newline;
        }

        let return_key = field.return_key;
        if let Some(observer) = self.observer.as_mut() {
            if !observer.on_return(index, field) {
                return ReturnAction::Ignored;
            }
        }

        match return_key {
            ReturnKey::Done => ReturnAction::Submit,
            ReturnKey::Next | ReturnKey::Default => {
                self.focus_next();
                match self.focused {
                    Some(next) => ReturnAction::FocusNext(next),
                    None => ReturnAction::Ignored,
                }
            }
        }
    }
}

impl FieldLookup for Form {
    fn find_field(&self, identifier: &str) -> Option<&FormField> {
        self.fields()
            .filter(|f| f.identifier.as_deref() == Some(identifier))
            .last()
    }
}

fn sibling_hints(
    group_failures: &[FieldFailure],
    group_indices: std::ops::Range<usize>,
) -> Vec<DisplayHint> {
    let has_match_failure = group_failures
        .iter()
        .any(|f| matches!(f.failure.rule, RuleKind::MatchWith(_)));
    if !has_match_failure {
        return Vec::new();
    }

    group_indices
        .filter(|index| !group_failures.iter().any(|f| f.index == *index))
        .map(|index| DisplayHint::BlankError { index })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::events::MockFormObserver;
    use crate::state::forms::rule::Rule;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn text(identifier: &str, value: &str) -> FormField {
        FormField::builder()
            .identifier(identifier)
            .value(value)
            .build()
    }

    fn signup_form() -> Form {
        Form::new(vec![
            FormField::builder()
                .identifier("name")
                .label("Name")
                .rule(Rule::required())
                .build()
                .into(),
            FormField::builder()
                .identifier("email")
                .label("Email")
                .rules([Rule::required(), Rule::email()])
                .build()
                .into(),
            FieldGroup::horizontal(vec![
                FormField::builder()
                    .identifier("password")
                    .label("Password")
                    .secure(true)
                    .rules([Rule::required(), Rule::min_length(8)])
                    .build(),
                FormField::builder()
                    .identifier("confirm")
                    .label("Confirm password")
                    .secure(true)
                    .rule(Rule::match_with("password"))
                    .build(),
            ])
            .into(),
        ])
        .with_title("Sign up")
    }

    mod values {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_values_flattens_groups() {
            let form = Form::new(vec![
                text("a", "1").into(),
                FieldGroup::vertical(vec![text("b", "2")]).into(),
            ]);
            let expected: HashMap<String, String> =
                [("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
                    .into_iter()
                    .collect();
            assert_eq!(form.field_values(), expected);
        }

        #[test]
        fn test_absent_value_is_empty_string() {
            let form = Form::new(vec![FormField::builder().identifier("a").build().into()]);
            assert_eq!(form.field_values().get("a"), Some(&String::new()));
            assert_eq!(form.field_value("a"), Some(String::new()));
        }

        #[test]
        fn test_fields_without_identifier_are_skipped() {
            let form = Form::new(vec![
                FormField::builder().value("anon").build().into(),
                text("a", "1").into(),
            ]);
            assert_eq!(form.field_values().len(), 1);
        }

        #[test]
        fn test_duplicate_identifiers_last_wins() {
            let form = Form::new(vec![
                text("code", "first").into(),
                FieldGroup::vertical(vec![text("code", "second")]).into(),
            ]);
            assert_eq!(form.field_value("code"), Some("second".to_string()));
            assert_eq!(form.index_of("code"), Some(1));
        }

        #[test]
        fn test_field_value_missing() {
            let form = Form::new(vec![text("a", "1").into()]);
            assert_eq!(form.field_value("b"), None);
        }

        #[test]
        fn test_set_value_round_trip() {
            let mut form = signup_form();
            form.set_value("email", " Jane@Example.com ").unwrap();
            assert_eq!(form.field("email").unwrap().value(), Some(" Jane@Example.com "));
        }

        #[test]
        fn test_set_value_unknown_identifier() {
            let mut form = signup_form();
            let err = form.set_value("phone", "123").unwrap_err();
            assert!(matches!(err, FormError::UnknownField(id) if id == "phone"));
        }

        #[test]
        fn test_select_option_through_form() {
            let mut form = Form::new(vec![FormField::builder()
                .identifier("country")
                .options(["France", "Japan"])
                .build()
                .into()]);
            form.select_option(0, 1).unwrap();
            assert_eq!(form.field_value("country"), Some("Japan".to_string()));
            assert!(form.select_option(0, 5).is_err());
            assert!(matches!(
                form.select_option(9, 0),
                Err(FormError::NoFieldAt(9))
            ));
        }
    }

    mod validate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_validate_form_is_not_short_circuit() {
            let mut form = signup_form();
            assert!(!form.validate_form());

            assert_eq!(
                form.field("name").unwrap().error_message(),
                Some("Name is required")
            );
            assert_eq!(
                form.field("email").unwrap().error_message(),
                Some("Email is required")
            );
            assert_eq!(
                form.field("password").unwrap().error_message(),
                Some("Password is required")
            );
        }

        #[test]
        fn test_valid_form_passes_and_clears_errors() {
            let mut form = signup_form();
            assert!(!form.validate_form());

            form.set_value("name", "Ada").unwrap();
            form.set_value("email", "ada@example.com").unwrap();
            form.set_value("password", "analytical").unwrap();
            form.set_value("confirm", "analytical").unwrap();

            assert!(form.validate_form());
            assert!(form.fields().all(|f| f.error_message().is_none()));
        }

        #[test]
        fn test_form_validation_stores_failing_rule() {
            let mut form = signup_form();
            form.set_value("email", "nope").unwrap();
            form.validate_form();
            let stored = form.field("email").unwrap().error().unwrap();
            assert_eq!(stored.rule, RuleKind::Email(true));
            assert_eq!(stored.message, "Invalid email address");
        }

        #[test]
        fn test_report_lists_every_failure_in_order() {
            let mut form = signup_form();
            form.set_value("email", "nope").unwrap();
            let report = form.validate_form_report();

            let failed: Vec<_> = report
                .failures
                .iter()
                .map(|f| (f.index, f.failure.message.as_str()))
                .collect();
            assert_eq!(
                failed,
                vec![
                    (0, "Name is required"),
                    (1, "Invalid email address"),
                    (2, "Password is required"),
                ]
            );
        }

        #[test]
        fn test_validate_field_records_and_clears() {
            let mut form = signup_form();
            let failure = form.validate_field(0).unwrap().unwrap();
            assert_eq!(failure.rule, RuleKind::Required(true));
            assert_eq!(form.field_at(0).unwrap().error(), Some(&failure));
            assert_eq!(form.field_at(0).unwrap().error_message(), Some("Name is required"));

            form.set_value_at(0, "Ada").unwrap();
            assert_eq!(form.validate_field(0).unwrap(), None);
            assert!(form.field_at(0).unwrap().error_message().is_none());
        }

        #[test]
        fn test_validate_field_out_of_range() {
            let mut form = signup_form();
            assert!(matches!(form.validate_field(42), Err(FormError::NoFieldAt(42))));
        }

        #[test]
        fn test_validate_field_is_idempotent() {
            let mut form = signup_form();
            form.set_value("email", "bad").unwrap();
            let first = form.validate_field(1).unwrap();
            let second = form.validate_field(1).unwrap();
            assert_eq!(first, second);
        }

        #[test]
        fn test_match_with_failure_message() {
            let mut form = signup_form();
            form.set_value("password", "analytical").unwrap();
            form.set_value("confirm", "analytic").unwrap();
            let failure = form.validate_field(3).unwrap().unwrap();
            assert_eq!(failure.message, "Confirm password is not matching with Password");
        }

        #[test]
        fn test_match_with_is_one_directional() {
            let mut form = Form::new(vec![
                text("a", "one").into(),
                FormField::builder()
                    .identifier("b")
                    .value("two")
                    .rule(Rule::match_with("a"))
                    .build()
                    .into(),
            ]);
            let report = form.validate_form_report();
            assert_eq!(report.failures.len(), 1);
            assert_eq!(report.failures[0].identifier.as_deref(), Some("b"));
        }

        #[test]
        fn test_match_with_missing_target_passes() {
            let mut form = Form::new(vec![FormField::builder()
                .identifier("b")
                .value("two")
                .rule(Rule::match_with("ghost"))
                .build()
                .into()]);
            assert!(form.validate_form());
        }

        #[test]
        fn test_group_match_failure_hints_siblings() {
            let mut form = signup_form();
            form.set_value("name", "Ada").unwrap();
            form.set_value("email", "ada@example.com").unwrap();
            form.set_value("password", "analytical").unwrap();
            form.set_value("confirm", "different").unwrap();

            let report = form.validate_form_report();
            assert!(!report.is_valid());
            assert_eq!(report.hints, vec![DisplayHint::BlankError { index: 2 }]);
            // Hints leave the sibling's state alone
            assert!(form.field("password").unwrap().error_message().is_none());
        }

        #[test]
        fn test_no_hints_without_match_failure() {
            let mut form = signup_form();
            let report = form.validate_form_report();
            assert!(report.hints.is_empty());
        }

        #[test]
        fn test_configured_fallback_label_used() {
            let config = FormConfig {
                fallback_label: "Value".to_string(),
                ..Default::default()
            };
            let mut form = Form::new(vec![FormField::builder()
                .identifier("x")
                .rule(Rule::required())
                .build()
                .into()])
            .with_config(config);
            form.validate_form();
            assert_eq!(form.field("x").unwrap().error_message(), Some("Value is required"));
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_return_keys_assigned() {
            let form = signup_form();
            let keys: Vec<_> = form.fields().map(|f| f.return_key).collect();
            assert_eq!(
                keys,
                vec![
                    ReturnKey::Next,
                    ReturnKey::Next,
                    ReturnKey::Next,
                    ReturnKey::Done
                ]
            );
        }

        #[test]
        fn test_explicit_return_key_kept() {
            let form = Form::new(vec![
                FormField::builder().return_key(ReturnKey::Done).build().into(),
                FormField::builder().build().into(),
            ]);
            assert_eq!(form.field_at(0).unwrap().return_key, ReturnKey::Done);
        }

        #[test]
        fn test_focus_next_and_prev_wrap() {
            let mut form = signup_form();
            assert_eq!(form.focused(), None);
            form.focus_next();
            assert_eq!(form.focused(), Some(0));
            form.focus_prev();
            assert_eq!(form.focused(), Some(3));
            form.focus_next();
            assert_eq!(form.focused(), Some(0));
        }

        #[test]
        fn test_focus_out_of_range() {
            let mut form = signup_form();
            assert!(form.focus(10).is_err());
            assert_eq!(form.focused(), None);
        }

        #[test]
        fn test_return_moves_then_submits() {
            let mut form = signup_form();
            form.focus(0).unwrap();
            assert_eq!(form.handle_return(), ReturnAction::FocusNext(1));
            assert_eq!(form.handle_return(), ReturnAction::FocusNext(2));
            assert_eq!(form.handle_return(), ReturnAction::FocusNext(3));
            assert_eq!(form.handle_return(), ReturnAction::Submit);
        }

        #[test]
        fn test_return_without_focus_is_ignored() {
            let mut form = signup_form();
            assert_eq!(form.handle_return(), ReturnAction::Ignored);
        }

        #[test]
        fn test_return_in_multiline_inserts_newline() {
            let mut form = Form::new(vec![FormField::builder()
                .identifier("bio")
                .multiline(true)
                .value("line")
                .build()
                .into()]);
            form.focus(0).unwrap();
            assert_eq!(form.handle_return(), ReturnAction::Newline);
            assert_eq!(form.field_value("bio"), Some("line\n".to_string()));
        }

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut form = signup_form();
            form.input_char('x');
            assert_eq!(form.field_value("name"), Some(String::new()));

            form.focus(1).unwrap();
            form.input_char('a');
            form.input_char('b');
            form.backspace();
            assert_eq!(form.field_value("email"), Some("a".to_string()));
        }
    }

    mod observer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_focus_notifies() {
            let mut observer = MockFormObserver::new();
            observer
                .expect_on_focus()
                .withf(|index, field| *index == 1 && field.identifier.as_deref() == Some("email"))
                .times(1)
                .return_const(());

            let mut form = signup_form();
            form.set_observer(Box::new(observer));
            form.focus(1).unwrap();
        }

        #[test]
        fn test_return_veto() {
            let mut observer = MockFormObserver::new();
            observer.expect_on_focus().return_const(());
            observer
                .expect_on_return()
                .with(eq(0), mockall::predicate::always())
                .times(1)
                .return_const(false);

            let mut form = signup_form();
            form.set_observer(Box::new(observer));
            form.focus(0).unwrap();
            assert_eq!(form.handle_return(), ReturnAction::Ignored);
            assert_eq!(form.focused(), Some(0));
        }

        #[test]
        fn test_value_change_notifies() {
            let mut observer = MockFormObserver::new();
            observer
                .expect_on_value_changed()
                .withf(|index, field| *index == 0 && field.value() == Some("Ada"))
                .times(1)
                .return_const(());

            let mut form = signup_form();
            form.set_observer(Box::new(observer));
            form.set_value("name", "Ada").unwrap();
        }

        #[test]
        fn test_display_hints_forwarded() {
            let mut observer = MockFormObserver::new();
            observer.expect_on_value_changed().return_const(());
            observer
                .expect_on_display_hint()
                .with(eq(DisplayHint::BlankError { index: 2 }))
                .times(1)
                .return_const(());

            let mut form = signup_form();
            form.set_observer(Box::new(observer));
            form.set_value("password", "analytical").unwrap();
            form.set_value("confirm", "nope").unwrap();
            form.validate_form();
        }
    }
}
