use itertools::Itertools;
use log::debug;
use swaplint_ast::{Stmt, Symbol};
use swaplint_diagnostics::{AlwaysFixableViolation, Diagnostic, Edit, Fix};
use swaplint_text_size::{Ranged, TextRange};

use crate::checker::Checker;

/// ## What it does
/// Checks for code that swaps two variables through a temporary variable.
///
/// ## Why is this bad?
/// Two variables can be swapped in a single simultaneous assignment, which
/// also makes the intent of the swap explicit.
///
/// ## Example
/// ```text
/// temp = x
/// x = y
/// y = temp
/// ```
///
/// Use instead:
/// ```text
/// x, y = y, x
/// ```
///
/// ## Fix safety
/// The fix is marked as safe unless the three statements carry a comment,
/// which the rewrite would drop. No fix is offered when the temporary
/// variable is read or written again after the swap, or when it is declared
/// at module scope.
pub(crate) struct SwapWithTemporaryVariable<'a> {
    first: &'a str,
    second: &'a str,
}

impl AlwaysFixableViolation for SwapWithTemporaryVariable<'_> {
    const NAME: &'static str = "swap-with-temporary-variable";

    fn message(&self) -> String {
        let SwapWithTemporaryVariable { first, second } = self;
        format!("Consider swapping `{first}` and `{second}` by using simultaneous assignment")
    }

    fn fix_title(&self) -> String {
        let SwapWithTemporaryVariable { first, second } = self;
        format!("Use `{first}, {second} = {second}, {first}` instead")
    }
}

/// SWP001
pub(crate) fn swap_with_temporary_variable(checker: &Checker, suite: &[Stmt]) {
    for window in suite.iter().map(BareAssignment::from_stmt).tuple_windows() {
        // If a slot is empty, one of the three statements was not a
        // name-to-name assignment.
        let (Some(intro), Some(left), Some(right)) = window else {
            continue;
        };
        let Some(candidate) = SwapCandidate::from_window(intro, left, right) else {
            continue;
        };
        let Some(summary) = UsageSummary::analyze(checker, &candidate) else {
            continue;
        };

        let first = checker.interner().resolve(candidate.first);
        let second = checker.interner().resolve(candidate.second);
        let replacement = format!("{first}, {second} = {second}, {first}");
        let fix = classify_fix(summary, replacement, candidate.range);
        if let Fix::None(reason) = &fix {
            debug!(
                "no fix for swapping `{first}` and `{second}` at {:?}: {reason}",
                candidate.range
            );
        }

        checker.report(
            Diagnostic::new(SwapWithTemporaryVariable { first, second }, candidate.range)
                .with_fix(fix),
        );
    }
}

/// A statement of the shape `name = name`, with an optional annotation on
/// the target.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct BareAssignment {
    target: Symbol,
    value: Symbol,
    range: TextRange,
}

impl BareAssignment {
    /// Extracts the target and value names from a plain single-target
    /// assignment. Annotation-only statements, augmented assignments, and
    /// statements whose value is anything but a bare name do not qualify.
    fn from_stmt(stmt: &Stmt) -> Option<BareAssignment> {
        let (target, value) = match stmt {
            Stmt::Assign(assign) => (&assign.target, &assign.value),
            Stmt::AnnAssign(ann_assign) => {
                let Some(value) = &ann_assign.value else {
                    return None;
                };
                (&ann_assign.target, value)
            }
            // An augmented assignment rewrites its target in terms of the
            // target's old value, so it can never be one leg of a swap.
            _ => return None,
        };

        let (target, value) = (target.as_name_expr()?, value.as_name_expr()?);
        Some(BareAssignment {
            target: target.id,
            value: value.id,
            range: stmt.range(),
        })
    }
}

/// Three consecutive assignments forming `temp = first; first = second;
/// second = temp`.
#[derive(Debug, Clone, Copy)]
struct SwapCandidate {
    /// The temporary.
    temp: Symbol,
    /// The first swapped variable.
    first: Symbol,
    /// The second swapped variable.
    second: Symbol,
    /// The range of the statement that introduces the temporary.
    temp_stmt: TextRange,
    /// The range spanning all three statements.
    range: TextRange,
}

impl SwapCandidate {
    fn from_window(
        intro: BareAssignment,
        left: BareAssignment,
        right: BareAssignment,
    ) -> Option<SwapCandidate> {
        if intro.value != left.target || left.value != right.target || intro.target != right.value {
            return None;
        }
        let (temp, first, second) = (intro.target, left.target, right.target);
        // `t = a; a = t; t = t` and friends satisfy the equations above but
        // swap nothing.
        if temp == first || temp == second || first == second {
            return None;
        }
        Some(SwapCandidate {
            temp,
            first,
            second,
            temp_stmt: intro.range,
            range: TextRange::new(intro.range.start(), right.range.end()),
        })
    }
}

/// The usage facts that decide how a candidate's fix is classified.
#[derive(Debug, Clone, Copy)]
struct UsageSummary {
    /// The temporary is read or written again after the swap.
    reused_after: bool,
    /// The temporary is declared at module scope, or declared `global`.
    declared_global: bool,
    /// A comment intersects the candidate and would be dropped.
    has_comment: bool,
}

impl UsageSummary {
    fn analyze(checker: &Checker, candidate: &SwapCandidate) -> Option<UsageSummary> {
        let semantic = checker.semantic();
        let scope = semantic.current_scope();

        // The binding created by the `temp = first` statement, found among
        // the temp name's bindings by its range.
        let binding_id = scope.get_all(candidate.temp).find(|&id| {
            candidate
                .temp_stmt
                .contains_range(semantic.binding(id).range)
        })?;
        let binding = semantic.binding(binding_id);

        // Reads are recorded on the binding itself; writes surface as
        // shadowing bindings of the same name in this scope.
        let reused_after = binding
            .references()
            .any(|id| candidate.range.end() < semantic.reference(id).start())
            || scope
                .get_all(candidate.temp)
                .any(|id| candidate.range.end() < semantic.binding(id).range.start());

        let declared_global =
            binding.is_global() || semantic.global_scope().has(candidate.temp);

        let has_comment = checker.comment_ranges().intersects(candidate.range);

        Some(UsageSummary {
            reused_after,
            declared_global,
            has_comment,
        })
    }
}

/// Decides how the suggested rewrite is classified: a globally declared or
/// reused temporary suppresses the fix entirely, and a comment inside the
/// candidate downgrades it to unsafe.
fn classify_fix(summary: UsageSummary, replacement: String, range: TextRange) -> Fix {
    if summary.declared_global {
        Fix::none("temp variable is declared globally")
    } else if summary.reused_after {
        Fix::none("temp variable is reused after the swap")
    } else if summary.has_comment {
        Fix::unsafe_edit(
            Edit::range_replacement(replacement, range),
            "statement contains a comment",
        )
    } else {
        Fix::safe_edit(Edit::range_replacement(replacement, range))
    }
}
