//! Form domain layer
//!
//! Fields carry ordered validation rules; a form aggregates fields and groups,
//! validates them and tracks keyboard focus.

mod definition;
mod events;
mod field;
mod form_state;
mod group;
mod rule;
mod validation;

pub use definition::{EntryDefinition, FieldDefinition, FormDefinition, GroupDefinition};
pub use events::{FormObserver, ReturnAction};
pub use field::{FieldKind, FieldState, FormField, FormFieldBuilder, ReturnKey};
pub use form_state::{Form, FormEntry};
pub use group::{Axis, FieldGroup};
pub use rule::{FieldLookup, Rule, RuleKind};
pub use validation::{
    validate_field, DisplayHint, FieldFailure, ValidationFailure, ValidationReport,
};
