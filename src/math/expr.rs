use meval::{Context, Expr};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Plot error taxonomy
// ---------------------------------------------------------------------------

/// Errors that abort a whole plot request.
///
/// Per-point evaluation failures are *not* represented here: once an
/// expression is bound, domain errors come back as NaN/±inf and the samplers
/// simply drop those points.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The equation text did not compile, or references unknown names.
    #[error("could not parse equation: {0}")]
    Parse(#[from] meval::Error),

    /// Sampling produced zero usable points.
    #[error("no valid points found, check the equation and range")]
    NoValidPoints,

    /// Every function in the multi-function list was empty or invalid.
    #[error("no valid functions to plot")]
    NoValidFunctions,
}

// ---------------------------------------------------------------------------
// Compiled expression
// ---------------------------------------------------------------------------

/// A compiled equation, immutable once built.  Binding a variable set yields
/// a plain closure the samplers can sweep without touching meval again.
pub struct Expression {
    expr: Expr,
}

impl Expression {
    /// Compile equation text.  `^` is exponentiation, `*` is required for
    /// multiplication, and the usual function names (sin, cos, tan, exp,
    /// ln, log, sqrt, abs, …) and constants (pi, e) are available.
    pub fn compile(text: &str) -> Result<Self, PlotError> {
        let expr: Expr = text.parse()?;
        Ok(Self { expr })
    }

    /// Bind the single variable `x`.  Fails if the expression mentions any
    /// other free name.
    pub fn bind_x(&self) -> Result<impl Fn(f64) -> f64, PlotError> {
        Ok(self.expr.clone().bind_with_context(plot_context(), "x")?)
    }

    /// Bind the surface variables `x` and `y`.
    pub fn bind_xy(&self) -> Result<impl Fn(f64, f64) -> f64, PlotError> {
        Ok(self
            .expr
            .clone()
            .bind2_with_context(plot_context(), "x", "y")?)
    }
}

/// The meval builtins plus `log` as the natural logarithm (math.js
/// convention, and what the example equations expect) and `log10`.
fn plot_context() -> Context<'static> {
    let mut ctx = Context::new();
    ctx.func("log", f64::ln);
    ctx.func("log10", f64::log10);
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_and_evaluates() {
        let f = Expression::compile("sin(x) + 1").unwrap().bind_x().unwrap();
        assert!((f(0.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn log_is_natural_log() {
        let f = Expression::compile("log(x)").unwrap().bind_x().unwrap();
        assert!((f(std::f64::consts::E) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn two_variable_binding() {
        let f = Expression::compile("x * y + 1")
            .unwrap()
            .bind_xy()
            .unwrap();
        assert_eq!(f(3.0, 4.0), 13.0);
    }

    #[test]
    fn malformed_equation_is_a_parse_error() {
        assert!(matches!(
            Expression::compile("x^2 +"),
            Err(PlotError::Parse(_))
        ));
    }

    #[test]
    fn unknown_variable_fails_at_bind_time() {
        let expr = Expression::compile("x + q").unwrap();
        assert!(matches!(expr.bind_x(), Err(PlotError::Parse(_))));
    }

    #[test]
    fn domain_errors_come_back_non_finite() {
        let f = Expression::compile("1/x").unwrap().bind_x().unwrap();
        assert!(!f(0.0).is_finite());
        let g = Expression::compile("sqrt(x)").unwrap().bind_x().unwrap();
        assert!(g(-1.0).is_nan());
    }
}
