//! Diagnostic, edit, and fix types shared between the linter and its
//! consumers.

pub use diagnostic::Diagnostic;
pub use edit::Edit;
pub use fix::Fix;
pub use violation::{AlwaysFixableViolation, Violation};

mod diagnostic;
mod edit;
mod fix;
mod violation;
