//! The registry of lint rules.

use strum::IntoEnumIterator;
use strum_macros::EnumIter;

pub use rule_set::RuleSet;

mod rule_set;

/// All lint rules, one variant per rule.
#[derive(EnumIter, Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Rule {
    /// SWP001
    SwapWithTemporaryVariable,
}

impl Rule {
    /// The rule name, in kebab case.
    pub const fn name(self) -> &'static str {
        match self {
            Rule::SwapWithTemporaryVariable => "swap-with-temporary-variable",
        }
    }

    /// The rule code, as used in suppression comments and `--select`.
    pub const fn code(self) -> &'static str {
        match self {
            Rule::SwapWithTemporaryVariable => "SWP001",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, FromCodeError> {
        Rule::iter()
            .find(|rule| rule.code() == code)
            .ok_or(FromCodeError::Unknown)
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FromCodeError {
    #[error("unknown rule code")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::{FromCodeError, Rule};

    #[test]
    fn rule_code_round_trips() {
        assert_eq!(Rule::from_code("SWP001"), Ok(Rule::SwapWithTemporaryVariable));
        assert_eq!(Rule::SwapWithTemporaryVariable.code(), "SWP001");
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Rule::from_code("SWP999"), Err(FromCodeError::Unknown));
        assert_eq!(Rule::from_code(""), Err(FromCodeError::Unknown));
    }

    #[test]
    fn rule_names_are_kebab_case() {
        assert_eq!(
            Rule::SwapWithTemporaryVariable.name(),
            "swap-with-temporary-variable"
        );
    }
}
