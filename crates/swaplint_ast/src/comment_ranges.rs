use std::cmp::Ordering;
use std::ops::Deref;

use swaplint_text_size::TextRange;

/// The comments of one source file, as a sorted list of ranges.
///
/// The source provider collects these while tokenizing; the linter only ever
/// asks whether a comment intersects a given range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRanges {
    raw: Vec<TextRange>,
}

impl CommentRanges {
    pub fn new(mut ranges: Vec<TextRange>) -> Self {
        ranges.sort_by_key(|range| (range.start(), range.end()));
        Self { raw: ranges }
    }

    /// Returns `true` if any comment intersects the target range.
    pub fn intersects(&self, target: TextRange) -> bool {
        self.raw
            .binary_search_by(|range| {
                if range.intersect(target).is_some() {
                    Ordering::Equal
                } else if range.end() < target.start() {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            })
            .is_ok()
    }
}

impl Deref for CommentRanges {
    type Target = [TextRange];

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use swaplint_text_size::{TextRange, TextSize};

    use super::CommentRanges;

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    #[test]
    fn intersects_overlapping_comment() {
        let comments = CommentRanges::new(vec![range(10, 20), range(40, 50)]);
        assert!(comments.intersects(range(15, 30)));
        assert!(comments.intersects(range(0, 60)));
    }

    #[test]
    fn does_not_intersect_disjoint_ranges() {
        let comments = CommentRanges::new(vec![range(10, 20), range(40, 50)]);
        assert!(!comments.intersects(range(25, 35)));
        assert!(!comments.intersects(range(60, 70)));
        assert!(!comments.intersects(range(0, 5)));
    }

    #[test]
    fn empty_index_never_intersects() {
        let comments = CommentRanges::default();
        assert!(!comments.intersects(range(0, 100)));
    }
}
