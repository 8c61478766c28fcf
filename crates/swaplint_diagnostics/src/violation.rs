/// A lint rule violation.
pub trait Violation {
    /// The rule name, in kebab case.
    const NAME: &'static str;

    /// The message shown to the user to explain the violation.
    fn message(&self) -> String;

    /// The message shown to the user to explain the suggested fix, for rules
    /// that can carry one.
    fn fix_title(&self) -> Option<String> {
        None
    }
}

/// A [`Violation`] whose rule always formulates a fix, even when that fix is
/// later classified as inapplicable for a particular site.
pub trait AlwaysFixableViolation {
    /// The rule name, in kebab case.
    const NAME: &'static str;

    /// The message shown to the user to explain the violation.
    fn message(&self) -> String;

    /// The title for the suggested fix.
    fn fix_title(&self) -> String;
}

impl<V: AlwaysFixableViolation> Violation for V {
    const NAME: &'static str = V::NAME;

    fn message(&self) -> String {
        AlwaysFixableViolation::message(self)
    }

    fn fix_title(&self) -> Option<String> {
        Some(AlwaysFixableViolation::fix_title(self))
    }
}
