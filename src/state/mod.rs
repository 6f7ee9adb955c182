//! View-state model.
//!
//! The page's interactive state, independent of rendering: the scroll
//! tracker, the open/closed selection groups behind the menu and the
//! project modal, and the contact form's submission lifecycle. Event
//! handlers in the TUI layer mutate these; widgets only read them.

pub mod form;
pub mod scroll;
pub mod selection;

pub use form::{ContactForm, FormField, FormTimer, SubmissionStatus, SubmitOutcome};
pub use scroll::ScrollState;
pub use selection::Selection;
