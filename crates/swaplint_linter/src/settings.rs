//! Settings for one lint run.

use crate::registry::{Rule, RuleSet};

#[derive(Debug, Clone)]
pub struct LinterSettings {
    /// The enabled rules.
    pub rules: RuleSet,
}

impl LinterSettings {
    /// Settings with only the given rule enabled.
    pub fn for_rule(rule: Rule) -> Self {
        Self {
            rules: RuleSet::from_rule(rule),
        }
    }

    /// Settings with only the given rules enabled.
    pub fn for_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }
}

impl Default for LinterSettings {
    /// Every rule is enabled by default.
    fn default() -> Self {
        Self {
            rules: RuleSet::all(),
        }
    }
}
