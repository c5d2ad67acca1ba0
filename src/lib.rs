//! Formwork - declarative forms with ordered per-field validation
//!
//! Build a [`Form`] from fields and groups (in code or from a JSON
//! [`FormDefinition`]), feed it values from any presentation layer, and ask it
//! to validate. Validation failures are plain values recorded on each field;
//! nothing here draws anything.

pub mod config;
pub mod error;
pub mod state;

pub use config::{Appearance, FormConfig};
pub use error::{FormError, Result};
pub use state::*;
