#[cfg(feature = "serde")]
use serde::Serialize;
use swaplint_text_size::{Ranged, TextRange};

use crate::Fix;
use crate::violation::Violation;

/// A rule violation at a source range, together with its classified fix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Diagnostic {
    /// The name of the rule that produced the diagnostic, in kebab case.
    pub name: &'static str,
    /// The message body shown to the user.
    pub body: String,
    /// The message explaining the suggested fix, if the rule has one.
    pub suggestion: Option<String>,
    /// The range of the offending code.
    pub range: TextRange,
    /// The classified fix, once the producing rule has decided on one.
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new<T: Violation>(kind: T, range: TextRange) -> Self {
        Self {
            name: T::NAME,
            body: kind.message(),
            suggestion: kind.fix_title(),
            range,
            fix: None,
        }
    }

    /// Consumes `self` and returns a new `Diagnostic` with the given `fix`.
    #[inline]
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.set_fix(fix);
        self
    }

    /// Sets the [`Fix`] attached to the diagnostic.
    #[inline]
    pub fn set_fix(&mut self, fix: Fix) {
        self.fix = Some(fix);
    }
}

impl Ranged for Diagnostic {
    fn range(&self) -> TextRange {
        self.range
    }
}
