use std::rc::Rc;

use meval::{
    Context,
    Expr
};
use tracing::debug;

use super::formula::Formula;
use super::parsefailure::ParseFailure;
use super::typeset::to_latex;

/// Name of the free variable.
pub const VARIABLE: &str = "x";

/// Compiles `text` into a formula of `x`.
///
/// Blank text is not an error: it yields `Ok(None)` and nothing downstream
/// should run. Missing multiplication signs are not inferred, so `2x` fails
/// with [`ParseFailure::Malformed`]. Unknown names fail with
/// [`ParseFailure::Other`].
pub fn compile(text: &str) -> Result<Option<Formula>, ParseFailure> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let source = normalize(trimmed);
    let result = build(trimmed, &source);
    match &result {
        Ok(formula) => debug!(text = trimmed, typeset = formula.typeset(), "formula compiled"),
        Err(failure) => debug!(text = trimmed, %failure, "formula rejected")
    }
    result.map(Some)
}

fn build(text: &str, source: &str) -> Result<Formula, ParseFailure> {
    let typeset = to_latex(source)?;
    let expr: Expr = source.parse()?;
    // binding resolves every name against the builtin context up front
    source.parse::<Expr>()?.bind(VARIABLE)?;

    // any evaluation error becomes NaN
    let context = Context::new();
    let evaluator = move |x: f64| {
        expr.eval_with_context(((VARIABLE, x), &context))
            .unwrap_or(f64::NAN)
    };
    Ok(Formula::new(text.to_owned(), typeset, Rc::new(evaluator)))
}

/// Accepts `**` for powers and `log` for the natural logarithm.
fn normalize(text: &str) -> String {
    text.replace("**", "^").replace("log(", "ln(")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(text: &str) -> Formula {
        compile(text).unwrap().unwrap()
    }

    #[test]
    fn blank_text_is_no_formula() {
        assert!(compile("").unwrap().is_none());
        assert!(compile("   \t ").unwrap().is_none());
    }

    #[test]
    fn sine_at_zero() {
        let formula = compiled("sin(x)");
        assert!(formula.evaluate(0.0).abs() < 1e-12);
        assert_eq!(formula.typeset(), "\\sin{\\left(x \\right)}");
    }

    #[test]
    fn implicit_multiplication_is_malformed() {
        assert_eq!(compile("2x").unwrap_err(), ParseFailure::Malformed);
        assert_eq!(compile("2*x").unwrap().unwrap().evaluate(3.0), 6.0);
    }

    #[test]
    fn unbalanced_is_malformed() {
        assert_eq!(compile("(x+1").unwrap_err(), ParseFailure::Malformed);
        assert_eq!(compile("x+").unwrap_err(), ParseFailure::Malformed);
    }

    #[test]
    fn factorial_is_not_in_the_grammar() {
        assert_eq!(compile("x!").unwrap_err(), ParseFailure::Malformed);
    }

    #[test]
    fn unknown_symbol_is_other() {
        match compile("x + y").unwrap_err() {
            ParseFailure::Other(detail) => assert!(detail.contains('y')),
            ParseFailure::Malformed => panic!("expected Other"),
        }
        assert!(matches!(compile("foo(x)").unwrap_err(), ParseFailure::Other(_)));
    }

    #[test]
    fn text_is_trimmed() {
        let formula = compiled("  x^2 ");
        assert_eq!(formula.text(), "x^2");
        assert_eq!(formula.evaluate(3.0), 9.0);
    }

    #[test]
    fn python_style_power_and_log() {
        let formula = compiled("x**2 + log(x)");
        assert!((formula.evaluate(1.0) - 1.0).abs() < 1e-12);
        assert_eq!(formula.text(), "x**2 + log(x)");
    }

    #[test]
    fn constants() {
        let formula = compiled("pi*x + e");
        assert!((formula.evaluate(1.0) - (std::f64::consts::PI + std::f64::consts::E)).abs() < 1e-12);
    }

    #[test]
    fn domain_errors_are_not_finite() {
        let formula = compiled("ln(x)");
        assert!(formula.evaluate(-1.0).is_nan());
        assert!(formula.evaluate(0.0).is_infinite());
        let formula = compiled("1/x");
        assert!(formula.evaluate(0.0).is_infinite());
    }
}
