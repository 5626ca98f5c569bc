// ---------------------------------------------------------------------------
// Typeset-style equation labels
// ---------------------------------------------------------------------------

/// Format an equation for the display line above the plot, e.g.
/// `pretty_equation("y", "sqrt(x^2)")` → `"y = √(x²)"`.
///
/// This is a plain Unicode substitution pass, not real typesetting: `sqrt`
/// becomes `√`, `pi` becomes `π`, `*` becomes `·`, and lone `^2`/`^3`
/// exponents become superscripts.  Unrecognised syntax passes through
/// untouched.
pub fn pretty_equation(lhs: &str, equation: &str) -> String {
    let mut out = String::with_capacity(equation.len() + 8);
    out.push_str(lhs);
    out.push_str(" = ");

    let body = equation.replace("sqrt", "√").replace("pi", "π");

    let chars: Vec<char> = body.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => out.push('·'),
            '^' if i + 1 < chars.len() && matches!(chars[i + 1], '2' | '3') => {
                // Only a lone digit is a superscript: `x^23` keeps its caret.
                let followed_by_digit =
                    chars.get(i + 2).is_some_and(|c| c.is_ascii_digit());
                if followed_by_digit {
                    out.push('^');
                } else {
                    out.push(if chars[i + 1] == '2' { '²' } else { '³' });
                    i += 1;
                }
            }
            c => out.push(c),
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_and_cubes_become_superscripts() {
        assert_eq!(pretty_equation("y", "x^2"), "y = x²");
        assert_eq!(pretty_equation("y", "x^3 - x^2"), "y = x³ - x²");
    }

    #[test]
    fn sqrt_star_and_pi_are_substituted() {
        assert_eq!(
            pretty_equation("z", "sqrt(x^2 + y^2)"),
            "z = √(x² + y²)"
        );
        assert_eq!(pretty_equation("y", "2*sin(pi*x)"), "y = 2·sin(π·x)");
    }

    #[test]
    fn multi_digit_exponents_keep_the_caret() {
        assert_eq!(pretty_equation("y", "x^23"), "y = x^23");
        assert_eq!(pretty_equation("y", "x^x"), "y = x^x");
    }
}
