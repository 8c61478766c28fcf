use swaplint_ast::Symbol;
use swaplint_text_size::TextRange;

use crate::binding::{Binding, BindingFlags, BindingId, BindingKind, Bindings};
use crate::reference::{ResolvedReference, ResolvedReferenceId, ResolvedReferences};
use crate::scope::{Scope, ScopeId, ScopeKind, Scopes};

/// The semantic model of one source file: scopes, bindings, and resolved
/// reads, built in a single pass before any rule runs.
#[derive(Debug)]
pub struct SemanticModel<'a> {
    scopes: Scopes<'a>,
    bindings: Bindings,
    resolved_references: ResolvedReferences,
    /// The scope currently being built or analyzed.
    pub scope_id: ScopeId,
}

impl<'a> SemanticModel<'a> {
    pub fn new() -> Self {
        Self {
            scopes: Scopes::default(),
            bindings: Bindings::default(),
            resolved_references: ResolvedReferences::default(),
            scope_id: ScopeId::global(),
        }
    }

    /// Enters a new child scope of the current scope.
    pub fn push_scope(&mut self, kind: ScopeKind<'a>) -> ScopeId {
        let id = self.scopes.push_scope(kind, self.scope_id);
        self.scope_id = id;
        id
    }

    /// Leaves the current scope, restoring its parent.
    pub fn pop_scope(&mut self) {
        self.scope_id = self.scopes[self.scope_id]
            .parent
            .expect("attempted to pop the module scope");
    }

    /// Adds a binding for `name` to the current scope.
    pub fn push_binding(
        &mut self,
        name: Symbol,
        range: TextRange,
        kind: BindingKind,
        flags: BindingFlags,
    ) -> BindingId {
        let id = self.bindings.push(Binding {
            kind,
            range,
            references: Vec::new(),
            flags,
        });
        self.scopes[self.scope_id].add(name, id);
        id
    }

    /// Resolves a read of `name` against the current scope chain. On
    /// success, the read is recorded against the binding it resolved to.
    pub fn resolve_read(&mut self, name: Symbol, range: TextRange) -> Option<BindingId> {
        let scope_id = self.scope_id;
        let binding_id = self
            .scopes
            .ancestor_ids(scope_id)
            .find_map(|id| self.scopes[id].get(name))?;
        let reference_id = self.resolved_references.push(scope_id, range);
        self.bindings[binding_id].references.push(reference_id);
        Some(binding_id)
    }

    /// Returns `true` if `name` was declared `global` in the current scope.
    pub fn is_declared_global(&self, name: Symbol) -> bool {
        self.current_scope()
            .get_all(name)
            .any(|id| self.bindings[id].kind.is_global())
    }

    /// The scope the model currently points at.
    pub fn current_scope(&self) -> &Scope<'a> {
        &self.scopes[self.scope_id]
    }

    /// The module (global) scope.
    pub fn global_scope(&self) -> &Scope<'a> {
        self.scopes.global()
    }

    pub fn scopes(&self) -> &Scopes<'a> {
        &self.scopes
    }

    pub fn binding(&self, id: BindingId) -> &Binding {
        &self.bindings[id]
    }

    pub fn reference(&self, id: ResolvedReferenceId) -> &ResolvedReference {
        &self.resolved_references[id]
    }
}

impl Default for SemanticModel<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use swaplint_ast::{Interner, StmtFunctionDef};
    use swaplint_text_size::{Ranged, TextRange, TextSize};

    use super::SemanticModel;
    use crate::binding::{BindingFlags, BindingKind};
    use crate::scope::{ScopeId, ScopeKind};

    fn range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::from(start), TextSize::from(end))
    }

    fn function_def(interner: &mut Interner, name: &str) -> StmtFunctionDef {
        StmtFunctionDef {
            name: interner.intern(name),
            parameters: Vec::new(),
            body: Vec::new(),
            range: TextRange::empty(TextSize::from(0)),
        }
    }

    #[test]
    fn rebinding_shadows_the_previous_binding() {
        let mut interner = Interner::new();
        let x = interner.intern("x");
        let mut model = SemanticModel::new();

        let first = model.push_binding(x, range(0, 1), BindingKind::Assignment, BindingFlags::empty());
        let second =
            model.push_binding(x, range(10, 11), BindingKind::Assignment, BindingFlags::empty());

        assert_eq!(model.current_scope().get(x), Some(second));
        let all: Vec<_> = model.current_scope().get_all(x).collect();
        assert_eq!(all, [second, first]);
    }

    #[test]
    fn reads_resolve_through_the_scope_chain() {
        let mut interner = Interner::new();
        let temp = interner.intern("temp");
        let inner = function_def(&mut interner, "inner");

        let mut model = SemanticModel::new();
        let binding =
            model.push_binding(temp, range(0, 4), BindingKind::Assignment, BindingFlags::empty());
        model.push_scope(ScopeKind::Function(&inner));

        assert_eq!(model.resolve_read(temp, range(20, 24)), Some(binding));
        let reads: Vec<_> = model
            .binding(binding)
            .references()
            .map(|id| model.reference(id).range())
            .collect();
        assert_eq!(reads, [range(20, 24)]);

        model.pop_scope();
        assert_eq!(model.scope_id, ScopeId::global());
    }

    #[test]
    fn local_rebinding_intercepts_nested_reads() {
        let mut interner = Interner::new();
        let temp = interner.intern("temp");
        let inner = function_def(&mut interner, "inner");

        let mut model = SemanticModel::new();
        let outer =
            model.push_binding(temp, range(0, 4), BindingKind::Assignment, BindingFlags::empty());
        model.push_scope(ScopeKind::Function(&inner));
        let local =
            model.push_binding(temp, range(10, 14), BindingKind::Assignment, BindingFlags::empty());

        assert_eq!(model.resolve_read(temp, range(20, 24)), Some(local));
        assert!(!model.binding(outer).is_used());
    }

    #[test]
    fn unresolvable_reads_are_not_recorded() {
        let mut interner = Interner::new();
        let ghost = interner.intern("ghost");
        let mut model = SemanticModel::new();
        assert_eq!(model.resolve_read(ghost, range(0, 5)), None);
    }

    #[test]
    fn global_declarations_mark_later_bindings() {
        let mut interner = Interner::new();
        let swap_var = interner.intern("swap_var");
        let function = function_def(&mut interner, "function");

        let mut model = SemanticModel::new();
        model.push_scope(ScopeKind::Function(&function));
        model.push_binding(swap_var, range(0, 8), BindingKind::Global, BindingFlags::GLOBAL);
        assert!(model.is_declared_global(swap_var));

        let rebound =
            model.push_binding(swap_var, range(10, 18), BindingKind::Assignment, BindingFlags::GLOBAL);
        assert!(model.binding(rebound).is_global());
    }
}
