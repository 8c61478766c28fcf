use std::fmt::{Debug, Formatter};

use strum::IntoEnumIterator;

use crate::registry::Rule;

/// A set of [`Rule`]s, stored as a bitset.
///
/// A bit of one signals that the rule with that discriminant is in the set.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleSet(u64);

impl RuleSet {
    /// Returns an empty rule set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a rule set containing every rule.
    pub fn all() -> Self {
        Rule::iter().collect()
    }

    #[inline]
    pub const fn from_rule(rule: Rule) -> Self {
        Self(1 << (rule as u16))
    }

    pub const fn from_rules(rules: &[Rule]) -> Self {
        let mut set = RuleSet::empty();
        let mut i = 0;
        // `for` is not allowed in const functions.
        while i < rules.len() {
            set = set.union(&RuleSet::from_rule(rules[i]));
            i += 1;
        }
        set
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `self` without the rules contained in `other`.
    #[must_use]
    pub const fn subtract(self, other: &Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if `rule` is in the set.
    #[inline]
    pub const fn contains(&self, rule: Rule) -> bool {
        self.0 & RuleSet::from_rule(rule).0 != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of rules in the set.
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Returns an iterator over the rules in the set.
    pub fn iter(&self) -> impl Iterator<Item = Rule> {
        let set = *self;
        Rule::iter().filter(move |rule| set.contains(*rule))
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        iter.into_iter()
            .fold(RuleSet::empty(), |set, rule| set.union(&RuleSet::from_rule(rule)))
    }
}

impl Debug for RuleSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
