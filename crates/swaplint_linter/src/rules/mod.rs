pub(crate) use swap_with_temporary_variable::*;

mod swap_with_temporary_variable;

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use swaplint_diagnostics::{Diagnostic, Fix};
    use swaplint_text_size::{TextRange, TextSize};

    use crate::registry::{Rule, RuleSet};
    use crate::settings::LinterSettings;
    use crate::test::lint_source;

    fn swap_diagnostics(source: &str) -> Result<Vec<Diagnostic>> {
        lint_source(
            source,
            &LinterSettings::for_rule(Rule::SwapWithTemporaryVariable),
        )
    }

    /// The range between the first occurrence of `first` and the end of the
    /// last occurrence of `last` in `source`.
    fn span(source: &str, first: &str, last: &str) -> TextRange {
        let start = source.find(first).expect("span start not in source");
        let end = source.rfind(last).expect("span end not in source") + last.len();
        TextRange::new(
            TextSize::try_from(start).unwrap(),
            TextSize::try_from(end).unwrap(),
        )
    }

    #[test]
    fn swap_without_interference_gets_a_safe_fix() -> Result<()> {
        let source = "\
def foo(x: int, y: int):
    temp: int = x
    x = y
    y = temp
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);

        let diagnostic = &diagnostics[0];
        assert_eq!(diagnostic.name, "swap-with-temporary-variable");
        assert_eq!(
            diagnostic.body,
            "Consider swapping `x` and `y` by using simultaneous assignment"
        );
        assert_eq!(
            diagnostic.suggestion.as_deref(),
            Some("Use `x, y = y, x` instead")
        );
        assert_eq!(diagnostic.range, span(source, "temp: int = x", "y = temp"));

        let Some(Fix::Safe(edit)) = &diagnostic.fix else {
            panic!("expected a safe fix, got {:?}", diagnostic.fix);
        };
        assert_eq!(edit.content(), Some("x, y = y, x"));
        Ok(())
    }

    #[test]
    fn swap_with_a_trailing_comment_gets_an_unsafe_fix() -> Result<()> {
        let source = "\
def bar(x: int, y: int):
    temp: int = x  # comment
    x = y
    y = temp
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);

        let Some(Fix::Unsafe(edit, reason)) = &diagnostics[0].fix else {
            panic!("expected an unsafe fix, got {:?}", diagnostics[0].fix);
        };
        assert_eq!(edit.content(), Some("x, y = y, x"));
        assert_eq!(reason, "statement contains a comment");
        Ok(())
    }

    #[test]
    fn swap_with_a_comment_between_statements_gets_an_unsafe_fix() -> Result<()> {
        let source = "\
def bar(x: int, y: int):
    temp = x
    # about to swap
    x = y
    y = temp
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(&diagnostics[0].fix, Some(Fix::Unsafe(..))));
        Ok(())
    }

    #[test]
    fn final_assignment_from_the_wrong_name_is_not_a_swap() -> Result<()> {
        let source = "\
def baz(x: int, y: int):
    temp = x
    x = y
    y = x
";
        assert_eq!(swap_diagnostics(source)?, []);
        Ok(())
    }

    #[test]
    fn reusing_the_temporary_suppresses_the_fix() -> Result<()> {
        let source = "\
def foobar(x: int, y: int):
    temp = x
    x = y
    y = temp

    # use temp variable again,
    # so its declaration can't be removed
    z = temp
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fix,
            Some(Fix::none("temp variable is reused after the swap"))
        );
        Ok(())
    }

    #[test]
    fn rewriting_the_temporary_suppresses_the_fix() -> Result<()> {
        let source = "\
def f(x: int, y: int):
    temp = x
    x = y
    y = temp
    temp = y
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fix,
            Some(Fix::none("temp variable is reused after the swap"))
        );
        Ok(())
    }

    #[test]
    fn reading_the_temporary_from_a_nested_function_suppresses_the_fix() -> Result<()> {
        let source = "\
def outer(x: int, y: int):
    temp = x
    x = y
    y = temp

    def inner():
        z = temp
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fix,
            Some(Fix::none("temp variable is reused after the swap"))
        );
        Ok(())
    }

    #[test]
    fn module_level_binding_of_the_temporary_suppresses_the_fix() -> Result<()> {
        let source = "\
swap_var = 0


def quux(x: int, y: int):
    swap_var = x
    x = y
    y = swap_var
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fix,
            Some(Fix::none("temp variable is declared globally"))
        );
        Ok(())
    }

    #[test]
    fn global_declaration_of_the_temporary_suppresses_the_fix() -> Result<()> {
        let source = "\
def quux(x: int, y: int):
    global swap_var
    swap_var = x
    x = y
    y = swap_var
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fix,
            Some(Fix::none("temp variable is declared globally"))
        );
        Ok(())
    }

    #[test]
    fn module_level_swap_counts_as_globally_declared() -> Result<()> {
        let source = "\
x = 1
y = 2
temp = x
x = y
y = temp
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].fix,
            Some(Fix::none("temp variable is declared globally"))
        );
        Ok(())
    }

    #[test]
    fn augmented_assignment_breaks_the_pattern() -> Result<()> {
        let source = "\
def f(x: int, y: int):
    temp = x
    x += y
    y = temp
";
        assert_eq!(swap_diagnostics(source)?, []);
        Ok(())
    }

    #[test]
    fn literal_value_breaks_the_pattern() -> Result<()> {
        let source = "\
def f(x: int, y: int):
    temp = 0
    x = y
    y = temp
";
        assert_eq!(swap_diagnostics(source)?, []);
        Ok(())
    }

    #[test]
    fn overlapping_names_are_not_a_swap() -> Result<()> {
        let source = "\
def f(a: int, t: int):
    t = a
    a = t
    t = t
";
        assert_eq!(swap_diagnostics(source)?, []);
        Ok(())
    }

    #[test]
    fn two_disjoint_swaps_are_both_reported() -> Result<()> {
        let source = "\
def f(a: int, b: int, c: int, d: int):
    t1 = a
    a = b
    b = t1
    t2 = c
    c = d
    d = t2
";
        let diagnostics = swap_diagnostics(source)?;
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().all(|diagnostic| matches!(
            diagnostic.fix,
            Some(Fix::Safe(_))
        )));
        assert_eq!(diagnostics[0].range, span(source, "t1 = a", "b = t1"));
        assert_eq!(diagnostics[1].range, span(source, "t2 = c", "d = t2"));
        Ok(())
    }

    #[test]
    fn disabled_rule_reports_nothing() -> Result<()> {
        let source = "\
def foo(x: int, y: int):
    temp = x
    x = y
    y = temp
";
        let settings = LinterSettings {
            rules: RuleSet::empty(),
        };
        assert_eq!(lint_source(source, &settings)?, []);
        Ok(())
    }

    #[test]
    fn default_settings_enable_the_rule() -> Result<()> {
        let source = "\
def foo(x: int, y: int):
    temp = x
    x = y
    y = temp
";
        let diagnostics = lint_source(source, &LinterSettings::default())?;
        assert_eq!(diagnostics.len(), 1);
        Ok(())
    }
}
