use swaplint_ast::{CommentRanges, Interner, Module};
use swaplint_diagnostics::Diagnostic;
use swaplint_text_size::Ranged;

use crate::checker::Checker;
use crate::settings::LinterSettings;

/// Lints one module, as handed over by the syntax-tree provider, and returns
/// the diagnostics in source order.
pub fn check_module(
    module: &Module,
    interner: &Interner,
    comment_ranges: &CommentRanges,
    settings: &LinterSettings,
) -> Vec<Diagnostic> {
    let mut diagnostics = Checker::new(module, interner, comment_ranges, settings).check();
    diagnostics.sort_by_key(|diagnostic| diagnostic.start());
    diagnostics
}
