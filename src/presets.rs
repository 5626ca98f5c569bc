use crate::state::Tab;

// ---------------------------------------------------------------------------
// Example equations per tab
// ---------------------------------------------------------------------------

pub struct Example {
    pub name: &'static str,
    pub equation: &'static str,
}

const fn ex(name: &'static str, equation: &'static str) -> Example {
    Example { name, equation }
}

const BASIC: [Example; 8] = [
    ex("x²", "x^2"),
    ex("sin(x)", "sin(x)"),
    ex("cos(x) + sin(2x)", "cos(x) + sin(2*x)"),
    ex("x³ - 3x² + 2x", "x^3 - 3*x^2 + 2*x"),
    ex("e^(-x²)", "exp(-x^2)"),
    ex("log(x)", "log(x)"),
    ex("|x|", "abs(x)"),
    ex("√x", "sqrt(x)"),
];

const ADVANCED: [Example; 6] = [
    ex("x·sin(1/x)", "x*sin(1/x)"),
    ex("x^x", "x^x"),
    ex("sinc(x)", "sin(x)/x"),
    ex("x²·e^(-x)", "x^2*exp(-x)"),
    ex("1/(1+x²)", "1/(1+x^2)"),
    ex("tan(x)", "tan(x)"),
];

const SURFACE: [Example; 5] = [
    ex("x² + y²", "x^2 + y^2"),
    ex("sin(√(x²+y²))", "sin(sqrt(x^2 + y^2))"),
    ex("cos(x)·sin(y)", "cos(x)*sin(y)"),
    ex("x² - y²", "x^2 - y^2"),
    ex("x·y", "x*y"),
];

/// Example equations for a tab.  The multi-function tab has none.
pub fn for_tab(tab: Tab) -> &'static [Example] {
    match tab {
        Tab::Basic => &BASIC,
        Tab::Advanced => &ADVANCED,
        Tab::Surface => &SURFACE,
        Tab::Multi => &[],
    }
}
