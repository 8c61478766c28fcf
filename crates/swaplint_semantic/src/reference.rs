use std::ops::Index;

use swaplint_text_size::{Ranged, TextRange};

use crate::scope::ScopeId;

/// A resolved read of a binding somewhere in the file.
#[derive(Debug, Clone)]
pub struct ResolvedReference {
    /// The scope the read occurs in.
    scope_id: ScopeId,
    /// The range of the read in the source.
    range: TextRange,
}

impl ResolvedReference {
    /// The scope the read occurs in.
    pub const fn scope_id(&self) -> ScopeId {
        self.scope_id
    }
}

impl Ranged for ResolvedReference {
    fn range(&self) -> TextRange {
        self.range
    }
}

/// Id uniquely identifying a resolved read in one file's model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolvedReferenceId(u32);

impl ResolvedReferenceId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("reference arena overflowed `u32`"))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The resolved reads of one file, indexed by [`ResolvedReferenceId`].
#[derive(Debug, Default)]
pub struct ResolvedReferences(Vec<ResolvedReference>);

impl ResolvedReferences {
    /// Pushes a new resolved read and returns its id.
    pub(crate) fn push(&mut self, scope_id: ScopeId, range: TextRange) -> ResolvedReferenceId {
        let id = ResolvedReferenceId::new(self.0.len());
        self.0.push(ResolvedReference { scope_id, range });
        id
    }
}

impl Index<ResolvedReferenceId> for ResolvedReferences {
    type Output = ResolvedReference;

    fn index(&self, id: ResolvedReferenceId) -> &Self::Output {
        &self.0[id.index()]
    }
}
