#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::edit::Edit;

/// The safety classification of a suggested rewrite.
///
/// Every diagnostic that recognizes a pattern carries one of these: a fix
/// that can be applied silently, a fix that needs review, or no fix at all
/// together with the reason it was withheld.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Fix {
    /// The rewrite is semantically equivalent to the original code and drops
    /// no source trivia.
    Safe(Edit),
    /// The rewrite is semantically equivalent but may drop a comment.
    Unsafe(Edit, String),
    /// No rewrite can be offered; the payload names the reason.
    None(String),
}

impl Fix {
    /// Creates a safe fix from a single edit.
    pub const fn safe_edit(edit: Edit) -> Self {
        Fix::Safe(edit)
    }

    /// Creates an unsafe fix from a single edit and the reason the fix needs
    /// review before it is applied.
    pub fn unsafe_edit(edit: Edit, reason: impl Into<String>) -> Self {
        Fix::Unsafe(edit, reason.into())
    }

    /// Records that no fix can be offered.
    pub fn none(reason: impl Into<String>) -> Self {
        Fix::None(reason.into())
    }

    /// The edit to apply, if one was produced.
    pub const fn edit(&self) -> Option<&Edit> {
        match self {
            Fix::Safe(edit) | Fix::Unsafe(edit, _) => Some(edit),
            Fix::None(_) => None,
        }
    }

    /// The reason the fix was downgraded or withheld.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Fix::Safe(_) => None,
            Fix::Unsafe(_, reason) | Fix::None(reason) => Some(reason),
        }
    }

    pub const fn is_safe(&self) -> bool {
        matches!(self, Fix::Safe(_))
    }

    pub const fn is_unsafe(&self) -> bool {
        matches!(self, Fix::Unsafe(..))
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Fix::None(_))
    }
}
