use std::ops::{Index, IndexMut};

use bitflags::bitflags;
use swaplint_text_size::TextRange;

use crate::reference::ResolvedReferenceId;

/// A single binding of a name within one scope.
#[derive(Debug, Clone)]
pub struct Binding {
    pub kind: BindingKind,
    pub range: TextRange,
    /// The resolved reads of this binding.
    pub references: Vec<ResolvedReferenceId>,
    /// Flags on the binding.
    pub flags: BindingFlags,
}

impl Binding {
    /// Returns `true` if at least one resolved read refers to this binding.
    pub fn is_used(&self) -> bool {
        !self.references.is_empty()
    }

    /// Returns an iterator over the resolved reads of this binding.
    pub fn references(&self) -> impl Iterator<Item = ResolvedReferenceId> + '_ {
        self.references.iter().copied()
    }

    /// Returns `true` if the bound name was the subject of a `global`
    /// declaration in the scope that created the binding.
    pub const fn is_global(&self) -> bool {
        self.flags.contains(BindingFlags::GLOBAL)
    }
}

bitflags! {
    /// Flags on a [`Binding`].
    #[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
    pub struct BindingFlags: u8 {
        /// The binding name was declared `global` in the scope that created
        /// the binding.
        const GLOBAL = 1 << 0;
    }
}

/// The statement shape that created a binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, is_macro::Is)]
pub enum BindingKind {
    /// `x = ...`
    Assignment,
    /// `x: int = ...`
    AnnotatedAssignment,
    /// A function parameter.
    Argument,
    /// `def x(): ...`
    FunctionDefinition,
    /// `global x`
    Global,
}

/// ID uniquely identifying a [`Binding`] in one file's model.
///
/// A `u32` is sufficient because bindings are separated by at least one byte
/// of source text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u32);

impl BindingId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("binding arena overflowed `u32`"))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The bindings of one file, indexed by [`BindingId`].
#[derive(Debug, Default)]
pub struct Bindings(Vec<Binding>);

impl Bindings {
    /// Pushes a new binding and returns its id.
    pub(crate) fn push(&mut self, binding: Binding) -> BindingId {
        let id = BindingId::new(self.0.len());
        self.0.push(binding);
        id
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<BindingId> for Bindings {
    type Output = Binding;

    fn index(&self, id: BindingId) -> &Self::Output {
        &self.0[id.index()]
    }
}

impl IndexMut<BindingId> for Bindings {
    fn index_mut(&mut self, id: BindingId) -> &mut Self::Output {
        &mut self.0[id.index()]
    }
}
