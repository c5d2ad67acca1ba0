//! Demo application state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use formwork::{
    DisplayHint, Form, FormConfig, FormDefinition, FormField, FormObserver, ReturnAction,
};
use std::collections::{BTreeMap, HashSet};

const SIGNUP_FORM: &str = include_str!("../forms/signup.json");

/// Logs focus changes and display hints
struct TraceObserver;

impl FormObserver for TraceObserver {
    fn on_focus(&mut self, index: usize, field: &FormField) {
        tracing::debug!(
            "focus -> {index} ({})",
            field.identifier.as_deref().unwrap_or("<unnamed>")
        );
    }

    fn on_display_hint(&mut self, hint: &DisplayHint) {
        tracing::debug!("display hint {hint:?}");
    }
}

/// Main application struct
pub struct App {
    pub form: Form,
    /// Fields that should show a blank error indicator
    pub blank_errors: HashSet<usize>,
    /// Feedback line shown under the form
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(config: FormConfig) -> Result<Self> {
        let mut form = FormDefinition::from_json(SIGNUP_FORM)?.into_form(config);
        form.set_observer(Box::new(TraceObserver));
        form.focus(0)?;

        Ok(Self {
            form,
            blank_errors: HashSet::new(),
            status_message: None,
            quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let on_picker = self.form.focused_field().is_some_and(FormField::is_picker);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()?;
            }
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Left if on_picker => self.cycle_option(false)?,
            KeyCode::Right | KeyCode::Char(' ') if on_picker => self.cycle_option(true)?,
            KeyCode::Enter => {
                if self.form.handle_return() == ReturnAction::Submit {
                    self.submit()?;
                }
            }
            KeyCode::Char(c) if !on_picker && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c);
            }
            KeyCode::Backspace if !on_picker => self.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Step the focused picker field to its next or previous option
    fn cycle_option(&mut self, forward: bool) -> Result<()> {
        let Some(index) = self.form.focused() else {
            return Ok(());
        };
        let Some(field) = self.form.field_at(index) else {
            return Ok(());
        };

        let count = field.options.len();
        let next = match (field.selected_option(), forward) {
            (None, _) => 0,
            (Some(current), true) => (current + 1) % count,
            (Some(0), false) => count - 1,
            (Some(current), false) => current - 1,
        };
        self.form.select_option(index, next)?;
        Ok(())
    }

    fn submit(&mut self) -> Result<()> {
        let report = self.form.validate_form_report();
        self.blank_errors = report
            .hints
            .iter()
            .map(|hint| match hint {
                DisplayHint::BlankError { index } => *index,
            })
            .collect();

        if report.is_valid() {
            let values: BTreeMap<_, _> = self.form.field_values().into_iter().collect();
            let json = serde_json::to_string(&values)?;
            tracing::info!("form submitted: {json}");
            self.status_message = Some(format!("Submitted {json}"));
        } else {
            let count = report.failures.len();
            self.status_message = Some(if count == 1 {
                "1 field needs attention".to_string()
            } else {
                format!("{count} fields need attention")
            });
            if let Some(first) = report.failures.first() {
                self.form.focus(first.index)?;
            }
        }
        Ok(())
    }
}
