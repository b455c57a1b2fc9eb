//! Dialogs and their shared footer.

pub mod checkbox;
pub mod footer;
pub mod selection;

pub use checkbox::{CheckboxDialog, CheckboxItem};
pub use footer::{DialogFooter, FooterButton, FooterButtons};
pub use selection::{Selection, SelectionMode};
