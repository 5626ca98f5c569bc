// ---------------------------------------------------------------------------
// Range – a plot axis interval
// ---------------------------------------------------------------------------

/// An axis interval.  `parse_range` does not reorder a reversed input;
/// downstream consumers must tolerate `min > max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Fallback used whenever a textual range cannot be parsed.
pub const DEFAULT_RANGE: Range = Range {
    min: -5.0,
    max: 5.0,
};

/// Parse a `min:max` range string.  Exactly two numeric tokens are required;
/// anything else silently falls back to [`DEFAULT_RANGE`].
pub fn parse_range(text: &str) -> Range {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() == 2 {
        if let (Ok(min), Ok(max)) = (parts[0].trim().parse(), parts[1].trim().parse()) {
            return Range { min, max };
        }
    }
    DEFAULT_RANGE
}

// ---------------------------------------------------------------------------
// 1-D sampling
// ---------------------------------------------------------------------------

/// Sample `f` at `resolution + 1` evenly spaced points over
/// `[x_min, x_max]`, dropping points where the result is not finite.
///
/// The grid is computed multiplicatively (`x_min + i·step`) so there is no
/// accumulated rounding drift along the axis.  A degenerate range yields a
/// single point; callers decide whether an empty result is an error.
pub fn sample_1d<F>(f: F, x_min: f64, x_max: f64, resolution: usize) -> Vec<[f64; 2]>
where
    F: Fn(f64) -> f64,
{
    let step = (x_max - x_min) / resolution.max(1) as f64;
    if !step.is_finite() {
        return Vec::new();
    }
    let last = if step == 0.0 { 0 } else { resolution.max(1) };

    let mut points = Vec::with_capacity(last + 1);
    for i in 0..=last {
        let x = x_min + i as f64 * step;
        let y = f(x);
        if y.is_finite() {
            points.push([x, y]);
        }
    }
    points
}

// ---------------------------------------------------------------------------
// 2-D grid sampling
// ---------------------------------------------------------------------------

/// A rectangular grid of sampled heights.  Row-major: `z[i][j]` is the value
/// at `(x_at(i), y_at(j))`.  Cells where evaluation was not finite hold
/// `None` so the grid shape stays rectangular for the renderer.
#[derive(Debug, Clone)]
pub struct SampleGrid {
    pub z: Vec<Vec<Option<f64>>>,
    pub x: Range,
    pub y: Range,
}

impl SampleGrid {
    /// Number of cells along one axis (side length − 1).
    pub fn resolution(&self) -> usize {
        self.z.len().saturating_sub(1)
    }

    pub fn x_at(&self, i: usize) -> f64 {
        self.x.min + i as f64 * self.x.span() / self.resolution().max(1) as f64
    }

    pub fn y_at(&self, j: usize) -> f64 {
        self.y.min + j as f64 * self.y.span() / self.resolution().max(1) as f64
    }

    /// Min and max over the present cells, or `None` if every cell is absent.
    pub fn z_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for z in self.z.iter().flatten().flatten() {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(*z), hi.max(*z)),
                None => (*z, *z),
            });
        }
        bounds
    }

    pub fn has_values(&self) -> bool {
        self.z.iter().flatten().any(Option::is_some)
    }
}

/// Sample `f` over a `(resolution + 1)²` grid.  Non-finite cells are stored
/// as absent rather than dropped.
pub fn sample_2d<F>(f: F, x: Range, y: Range, resolution: usize) -> SampleGrid
where
    F: Fn(f64, f64) -> f64,
{
    let resolution = resolution.max(1);
    let x_step = x.span() / resolution as f64;
    let y_step = y.span() / resolution as f64;

    let mut z = Vec::with_capacity(resolution + 1);
    for i in 0..=resolution {
        let xi = x.min + i as f64 * x_step;
        let mut row = Vec::with_capacity(resolution + 1);
        for j in 0..=resolution {
            let yj = y.min + j as f64 * y_step;
            let v = f(xi, yj);
            row.push(v.is_finite().then_some(v));
        }
        z.push(row);
    }

    SampleGrid { z, x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_increasing_and_finite() {
        let points = sample_1d(|x| x.sin(), -5.0, 5.0, 100);
        assert_eq!(points.len(), 101);
        for pair in points.windows(2) {
            assert!(pair[0][0] < pair[1][0]);
        }
        assert!(points.iter().all(|p| p[1].is_finite()));
    }

    #[test]
    fn constant_function_keeps_every_point() {
        let points = sample_1d(|_| 3.5, 0.0, 10.0, 40);
        assert_eq!(points.len(), 41);
        assert!(points.iter().all(|p| p[1] == 3.5));
    }

    #[test]
    fn singular_point_is_dropped_not_fatal() {
        // x == 0 lands exactly on the grid and divides by zero.
        let points = sample_1d(|x| 1.0 / x, -5.0, 5.0, 10);
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| p[0] != 0.0));
    }

    #[test]
    fn degenerate_range_yields_one_point() {
        let points = sample_1d(|x| x * x, 2.0, 2.0, 100);
        assert_eq!(points, vec![[2.0, 4.0]]);
    }

    #[test]
    fn everything_invalid_yields_empty() {
        let points = sample_1d(|x| (-1.0f64).sqrt() + x, 0.0, 1.0, 10);
        assert!(points.is_empty());
    }

    #[test]
    fn grid_is_rectangular_and_exact() {
        let grid = sample_2d(|x, y| x + y, Range::new(0.0, 2.0), Range::new(0.0, 2.0), 2);
        assert_eq!(grid.z.len(), 3);
        assert!(grid.z.iter().all(|row| row.len() == 3));
        assert_eq!(grid.z[2][2], Some(4.0));
        assert!(grid.z.iter().flatten().all(Option::is_some));
        assert_eq!(grid.z_bounds(), Some((0.0, 4.0)));
    }

    #[test]
    fn grid_records_absent_cells() {
        let grid = sample_2d(
            |x, y| 1.0 / (x * y),
            Range::new(-1.0, 1.0),
            Range::new(-1.0, 1.0),
            2,
        );
        // The x == 0 row and y == 0 column are singular.
        assert_eq!(grid.z[1][1], None);
        assert_eq!(grid.z[0][1], None);
        assert_eq!(grid.z[1][0], None);
        assert!(grid.z[0][0].is_some());
        assert!(grid.has_values());
    }

    #[test]
    fn parse_range_accepts_two_tokens() {
        assert_eq!(parse_range("-3:7"), Range::new(-3.0, 7.0));
        assert_eq!(parse_range(" -2.5 : 2.5 "), Range::new(-2.5, 2.5));
        // Reversed input is preserved, not reordered.
        assert_eq!(parse_range("5:-5"), Range::new(5.0, -5.0));
    }

    #[test]
    fn parse_range_falls_back_on_garbage() {
        assert_eq!(parse_range("abc"), DEFAULT_RANGE);
        assert_eq!(parse_range("5"), DEFAULT_RANGE);
        assert_eq!(parse_range("1:2:3"), DEFAULT_RANGE);
        assert_eq!(parse_range("a:1"), DEFAULT_RANGE);
        assert_eq!(parse_range(""), DEFAULT_RANGE);
    }
}
