use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;
use swaplint_ast::{StmtFunctionDef, Symbol};

use crate::binding::BindingId;

/// A lexical scope: the module body or one function body.
#[derive(Debug)]
pub struct Scope<'a> {
    /// The kind of scope.
    pub kind: ScopeKind<'a>,

    /// The parent scope, if any.
    pub parent: Option<ScopeId>,

    /// A map from bound name to the binding currently holding it.
    bindings: FxHashMap<Symbol, BindingId>,

    /// A map from binding to the binding it shadows, if any.
    shadowed_bindings: FxHashMap<BindingId, BindingId>,
}

impl<'a> Scope<'a> {
    pub(crate) fn global() -> Self {
        Scope {
            kind: ScopeKind::Module,
            parent: None,
            bindings: FxHashMap::default(),
            shadowed_bindings: FxHashMap::default(),
        }
    }

    pub(crate) fn local(kind: ScopeKind<'a>, parent: ScopeId) -> Self {
        Scope {
            kind,
            parent: Some(parent),
            bindings: FxHashMap::default(),
            shadowed_bindings: FxHashMap::default(),
        }
    }

    /// Returns the id of the binding currently bound to the given name.
    pub fn get(&self, name: Symbol) -> Option<BindingId> {
        self.bindings.get(&name).copied()
    }

    /// Adds a new binding for `name` to this scope, returning the binding it
    /// shadows, if any.
    pub(crate) fn add(&mut self, name: Symbol, id: BindingId) -> Option<BindingId> {
        if let Some(shadowed) = self.bindings.insert(name, id) {
            self.shadowed_bindings.insert(id, shadowed);
            Some(shadowed)
        } else {
            None
        }
    }

    /// Returns `true` if this scope holds a binding for the given name.
    pub fn has(&self, name: Symbol) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Like [`Scope::get`], but also yields the bindings that later bindings
    /// of the same name shadowed, latest first.
    pub fn get_all(&self, name: Symbol) -> impl Iterator<Item = BindingId> + '_ {
        std::iter::successors(self.get(name), |id| self.shadowed_bindings.get(id).copied())
    }

    /// Returns the ids of the live bindings defined in this scope.
    pub fn binding_ids(&self) -> impl Iterator<Item = BindingId> + '_ {
        self.bindings.values().copied()
    }
}

/// The kind of lexical scope.
#[derive(Debug, Clone, Copy, is_macro::Is)]
pub enum ScopeKind<'a> {
    Module,
    Function(&'a StmtFunctionDef),
}

/// Id uniquely identifying a scope in one file's model.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// Returns the id of the module (global) scope.
    pub const fn global() -> Self {
        Self(0)
    }

    /// Returns `true` if this is the id of the module scope.
    pub const fn is_global(self) -> bool {
        self.0 == 0
    }

    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).expect("scope arena overflowed `u32`"))
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The scopes of one file, indexed by [`ScopeId`].
///
/// Scope 0 is the module scope; parent links always lead back to it.
#[derive(Debug)]
pub struct Scopes<'a>(Vec<Scope<'a>>);

impl<'a> Scopes<'a> {
    /// Returns a reference to the module scope.
    pub fn global(&self) -> &Scope<'a> {
        &self[ScopeId::global()]
    }

    /// Pushes a new child scope and returns its id.
    pub(crate) fn push_scope(&mut self, kind: ScopeKind<'a>, parent: ScopeId) -> ScopeId {
        let next_id = ScopeId::new(self.0.len());
        self.0.push(Scope::local(kind, parent));
        next_id
    }

    /// Returns an iterator over the ancestor ids of the given scope,
    /// starting with the scope itself.
    pub fn ancestor_ids(&self, scope_id: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope_id), |&id| self[id].parent)
    }

    /// Returns an iterator over all scopes together with their ids.
    pub fn iter_enumerated(&self) -> impl Iterator<Item = (ScopeId, &Scope<'a>)> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, scope)| (ScopeId::new(index), scope))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Scopes<'_> {
    fn default() -> Self {
        Self(vec![Scope::global()])
    }
}

impl<'a> Index<ScopeId> for Scopes<'a> {
    type Output = Scope<'a>;

    fn index(&self, id: ScopeId) -> &Self::Output {
        &self.0[id.index()]
    }
}

impl IndexMut<ScopeId> for Scopes<'_> {
    fn index_mut(&mut self, id: ScopeId) -> &mut Self::Output {
        &mut self.0[id.index()]
    }
}
