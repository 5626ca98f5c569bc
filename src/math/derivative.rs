/// Estimate f′ from ordered samples by two-point finite differences.
///
/// Each adjacent pair contributes one sample at the interval midpoint with
/// value Δy/Δx.  Pairs with Δx == 0 or a non-finite slope are skipped.  This
/// is deliberately the simple two-point scheme, not a three-point stencil;
/// for a quadratic it is exact at the midpoints.
pub fn central_difference(samples: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut derivative = Vec::with_capacity(samples.len().saturating_sub(1));

    for pair in samples.windows(2) {
        let [x0, y0] = pair[0];
        let [x1, y1] = pair[1];
        let dx = x1 - x0;
        if dx == 0.0 {
            continue;
        }
        let slope = (y1 - y0) / dx;
        if slope.is_finite() {
            derivative.push([(x0 + x1) / 2.0, slope]);
        }
    }

    derivative
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sample::sample_1d;

    #[test]
    fn quadratic_slope_is_exact_at_midpoints() {
        let samples = sample_1d(|x| x * x, -5.0, 5.0, 200);
        let derivative = central_difference(&samples);
        assert_eq!(derivative.len(), samples.len() - 1);
        for [x, dy] in derivative {
            // (x1² − x0²)/(x1 − x0) == x0 + x1 == 2·midpoint
            assert!((dy - 2.0 * x).abs() < 1e-9, "slope at {x} was {dy}");
        }
    }

    #[test]
    fn midpoints_stay_monotonic() {
        let samples = sample_1d(f64::sin, 0.0, 6.0, 60);
        let derivative = central_difference(&samples);
        for pair in derivative.windows(2) {
            assert!(pair[0][0] < pair[1][0]);
        }
    }

    #[test]
    fn duplicate_x_is_skipped() {
        let samples = [[1.0, 1.0], [1.0, 5.0], [2.0, 2.0]];
        let derivative = central_difference(&samples);
        assert_eq!(derivative, vec![[1.5, -3.0]]);
    }

    #[test]
    fn short_input_yields_nothing() {
        assert!(central_difference(&[]).is_empty());
        assert!(central_difference(&[[0.0, 1.0]]).is_empty());
    }
}
