use std::cell::RefCell;

use swaplint_ast::{CommentRanges, Expr, Interner, Module, Stmt};
use swaplint_diagnostics::Diagnostic;
use swaplint_semantic::{BindingFlags, BindingKind, ScopeId, ScopeKind, SemanticModel};

use crate::registry::Rule;
use crate::rules;
use crate::settings::LinterSettings;

/// Drives one lint pass over a module: builds the semantic model in a first
/// traversal, then dispatches the enabled rules over every lexical block.
pub(crate) struct Checker<'a> {
    module: &'a Module,
    interner: &'a Interner,
    comment_ranges: &'a CommentRanges,
    settings: &'a LinterSettings,
    semantic: SemanticModel<'a>,
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl<'a> Checker<'a> {
    pub(crate) fn new(
        module: &'a Module,
        interner: &'a Interner,
        comment_ranges: &'a CommentRanges,
        settings: &'a LinterSettings,
    ) -> Self {
        Self {
            module,
            interner,
            comment_ranges,
            settings,
            semantic: SemanticModel::new(),
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// The semantic model for the module under analysis.
    pub(crate) fn semantic(&self) -> &SemanticModel<'a> {
        &self.semantic
    }

    /// The interner that produced the module's symbols.
    pub(crate) fn interner(&self) -> &'a Interner {
        self.interner
    }

    /// The comment index for the module's source file.
    pub(crate) fn comment_ranges(&self) -> &'a CommentRanges {
        self.comment_ranges
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.settings.rules.contains(rule)
    }

    /// Records a diagnostic produced by a rule.
    pub(crate) fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Runs the pass and returns the collected diagnostics.
    pub(crate) fn check(mut self) -> Vec<Diagnostic> {
        let module = self.module;
        self.bind_suite(&module.body);

        // The model must be complete before any suite is analyzed: reads
        // anywhere later in the file decide whether a fix survives.
        let suites: Vec<(ScopeId, &'a [Stmt])> = self
            .semantic
            .scopes()
            .iter_enumerated()
            .map(|(scope_id, scope)| {
                let suite: &'a [Stmt] = match scope.kind {
                    ScopeKind::Module => &module.body,
                    ScopeKind::Function(function_def) => &function_def.body,
                };
                (scope_id, suite)
            })
            .collect();
        for (scope_id, suite) in suites {
            self.semantic.scope_id = scope_id;
            self.analyze_suite(suite);
        }

        self.diagnostics.into_inner()
    }

    fn analyze_suite(&self, suite: &'a [Stmt]) {
        if self.is_rule_enabled(Rule::SwapWithTemporaryVariable) {
            rules::swap_with_temporary_variable(self, suite);
        }
    }

    fn bind_suite(&mut self, suite: &'a [Stmt]) {
        for stmt in suite {
            self.bind_stmt(stmt);
        }
    }

    fn bind_stmt(&mut self, stmt: &'a Stmt) {
        match stmt {
            Stmt::Assign(assign) => {
                // The value is read before the target is rebound, so
                // `x = x` resolves against the old binding.
                self.resolve_expr(&assign.value);
                self.bind_target(&assign.target, BindingKind::Assignment);
            }
            Stmt::AnnAssign(ann_assign) => {
                if let Some(value) = &ann_assign.value {
                    self.resolve_expr(value);
                }
                self.bind_target(&ann_assign.target, BindingKind::AnnotatedAssignment);
            }
            Stmt::AugAssign(aug_assign) => {
                // An augmented assignment reads its target before writing it.
                self.resolve_expr(&aug_assign.value);
                self.resolve_expr(&aug_assign.target);
                self.bind_target(&aug_assign.target, BindingKind::Assignment);
            }
            Stmt::Global(global) => {
                for &name in &global.names {
                    self.semantic.push_binding(
                        name,
                        global.range,
                        BindingKind::Global,
                        BindingFlags::GLOBAL,
                    );
                }
            }
            Stmt::FunctionDef(function_def) => {
                self.semantic.push_binding(
                    function_def.name,
                    function_def.range,
                    BindingKind::FunctionDefinition,
                    BindingFlags::empty(),
                );
                self.semantic.push_scope(ScopeKind::Function(function_def));
                for parameter in &function_def.parameters {
                    self.semantic.push_binding(
                        parameter.name,
                        parameter.range,
                        BindingKind::Argument,
                        BindingFlags::empty(),
                    );
                }
                self.bind_suite(&function_def.body);
                self.semantic.pop_scope();
            }
        }
    }

    fn bind_target(&mut self, target: &'a Expr, kind: BindingKind) {
        let Some(name) = target.as_name_expr() else {
            return;
        };
        let flags = if self.semantic.is_declared_global(name.id) {
            BindingFlags::GLOBAL
        } else {
            BindingFlags::empty()
        };
        self.semantic.push_binding(name.id, name.range, kind, flags);
    }

    fn resolve_expr(&mut self, expr: &'a Expr) {
        if let Some(name) = expr.as_name_expr() {
            // Reads that resolve to nothing (names the provider never bound)
            // are simply not tracked.
            let _ = self.semantic.resolve_read(name.id, name.range);
        }
    }
}
