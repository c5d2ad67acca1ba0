//! Presentation callbacks
//!
//! A host implements whichever of these it cares about; every method has a
//! no-op default.

use super::field::FormField;
use super::validation::DisplayHint;

/// Receives navigation and display notifications from a [`Form`](super::Form)
#[cfg_attr(test, mockall::automock)]
pub trait FormObserver {
    /// A field became the focused one
    fn on_focus(&mut self, _index: usize, _field: &FormField) {}

    /// Return was pressed on a single-line field; `false` vetoes the action
    fn on_return(&mut self, _index: usize, _field: &FormField) -> bool {
        true
    }

    /// A field's value was changed through the form
    fn on_value_changed(&mut self, _index: usize, _field: &FormField) {}

    /// A cosmetic hint produced while validating the form
    fn on_display_hint(&mut self, _hint: &DisplayHint) {}
}

/// What the host should do after return was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnAction {
    /// A newline was inserted into a multiline field
    Newline,
    /// Focus moved to the field at this index
    FocusNext(usize),
    /// The last field was completed; the host may submit
    Submit,
    /// Nothing focused, or the observer vetoed
    Ignored,
}
