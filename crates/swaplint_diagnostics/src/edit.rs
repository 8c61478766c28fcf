#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use swaplint_text_size::{Ranged, TextRange, TextSize};

/// A text edit to be applied to a source file. Inserts, deletes, or replaces
/// content over a given range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edit {
    /// The range of the source file to replace.
    range: TextRange,
    /// The replacement content. `None` for deletions.
    content: Option<Box<str>>,
}

impl Edit {
    /// Creates an edit that replaces the given range with `content`.
    pub fn range_replacement(content: String, range: TextRange) -> Self {
        debug_assert!(!content.is_empty(), "Prefer `Edit::range_deletion`");
        Self {
            range,
            content: Some(content.into_boxed_str()),
        }
    }

    /// Creates an edit that deletes the given range.
    pub const fn range_deletion(range: TextRange) -> Self {
        Self {
            range,
            content: None,
        }
    }

    /// Creates an edit that inserts `content` at `offset`.
    pub fn insertion(content: String, offset: TextSize) -> Self {
        debug_assert!(!content.is_empty(), "Insert content is empty");
        Self {
            range: TextRange::empty(offset),
            content: Some(content.into_boxed_str()),
        }
    }

    /// The replacement content, or `None` for a deletion.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub const fn is_deletion(&self) -> bool {
        self.content.is_none()
    }
}

impl Ranged for Edit {
    fn range(&self) -> TextRange {
        self.range
    }
}
