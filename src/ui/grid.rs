use eframe::egui::{Color32, ColorImage, Ui, Vec2};
use egui_plot::{Line, Plot, PlotImage, PlotPoint, PlotPoints};

use crate::color::ColorScale;
use crate::math::sample::SampleGrid;
use crate::state::{GridPlot, GridView};

/// Number of iso-levels drawn in the contour view.
const CONTOUR_LEVELS: usize = 10;

// ---------------------------------------------------------------------------
// Grid plot (surface / contour / heatmap)
// ---------------------------------------------------------------------------

pub fn grid_plot(ui: &mut Ui, plot: &GridPlot) {
    match plot.view {
        GridView::Heatmap => heatmap(ui, plot),
        GridView::Contour => contour(ui, plot),
        GridView::Surface => wireframe(ui, plot),
    }
}

fn heatmap(ui: &mut Ui, plot: &GridPlot) {
    let Some(texture) = &plot.texture else {
        return;
    };
    let grid = &plot.grid;
    let center = PlotPoint::new(
        (grid.x.min + grid.x.max) / 2.0,
        (grid.y.min + grid.y.max) / 2.0,
    );
    let size = Vec2::new(grid.x.span().abs() as f32, grid.y.span().abs() as f32);

    Plot::new("grid_heatmap")
        .x_axis_label("x")
        .y_axis_label("y")
        .show(ui, |plot_ui| {
            plot_ui.image(PlotImage::new(texture.id(), center, size));
        });
}

fn contour(ui: &mut Ui, plot: &GridPlot) {
    let grid = &plot.grid;
    let Some((z_min, z_max)) = grid.z_bounds() else {
        return;
    };
    let span = if z_max > z_min { z_max - z_min } else { 1.0 };

    Plot::new("grid_contour")
        .x_axis_label("x")
        .y_axis_label("y")
        .data_aspect(1.0)
        .show(ui, |plot_ui| {
            for k in 1..=CONTOUR_LEVELS {
                let t = k as f64 / (CONTOUR_LEVELS + 1) as f64;
                let level = z_min + t * span;
                let color = plot.scale.sample(t);
                for segment in contour_segments(grid, level) {
                    plot_ui.line(
                        Line::new(PlotPoints::from(segment.to_vec()))
                            .color(color)
                            .width(1.5),
                    );
                }
            }
        });
}

fn wireframe(ui: &mut Ui, plot: &GridPlot) {
    let grid = &plot.grid;
    let Some((z_min, z_max)) = grid.z_bounds() else {
        return;
    };
    let z_span = if z_max > z_min { z_max - z_min } else { 1.0 };
    let n = grid.resolution();

    // Isometric projection of the unit cube: axes normalized so the view is
    // independent of the actual ranges.
    let project = |i: usize, j: usize, z: f64| -> [f64; 2] {
        let nx = i as f64 / n.max(1) as f64;
        let ny = j as f64 / n.max(1) as f64;
        let nz = (z - z_min) / z_span;
        let u = (nx - ny) * 0.866;
        let v = (nx + ny) * 0.5 + nz;
        [u, v]
    };

    Plot::new("grid_surface")
        .show_axes(false)
        .show_grid(false)
        .data_aspect(1.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let mut polyline = |points: Vec<[f64; 2]>, color: Color32| {
                if points.len() > 1 {
                    plot_ui.line(
                        Line::new(PlotPoints::from(points))
                            .color(color)
                            .width(1.0),
                    );
                }
            };

            // Rows (constant i), broken at absent cells.
            for i in 0..=n {
                let mut run: Vec<[f64; 2]> = Vec::new();
                let mut height = 0.0;
                for j in 0..=n {
                    match grid.z[i][j] {
                        Some(z) => {
                            run.push(project(i, j, z));
                            height += (z - z_min) / z_span;
                        }
                        None => {
                            flush(&mut run, &mut height, &mut polyline, plot.scale);
                        }
                    }
                }
                flush(&mut run, &mut height, &mut polyline, plot.scale);
            }

            // Columns (constant j).
            for j in 0..=n {
                let mut run: Vec<[f64; 2]> = Vec::new();
                let mut height = 0.0;
                for i in 0..=n {
                    match grid.z[i][j] {
                        Some(z) => {
                            run.push(project(i, j, z));
                            height += (z - z_min) / z_span;
                        }
                        None => {
                            flush(&mut run, &mut height, &mut polyline, plot.scale);
                        }
                    }
                }
                flush(&mut run, &mut height, &mut polyline, plot.scale);
            }
        });
}

/// Emit an accumulated polyline coloured by its mean height, then reset.
fn flush<F>(run: &mut Vec<[f64; 2]>, height: &mut f64, polyline: &mut F, scale: ColorScale)
where
    F: FnMut(Vec<[f64; 2]>, Color32),
{
    if !run.is_empty() {
        let mean = *height / run.len() as f64;
        polyline(std::mem::take(run), scale.sample(mean));
    }
    *height = 0.0;
}

// ---------------------------------------------------------------------------
// Heatmap rasterization
// ---------------------------------------------------------------------------

/// Rasterize the grid through a colour scale.  Absent cells come out
/// transparent.  Pixel rows run top to bottom, so row 0 is the maximum y.
pub fn heatmap_image(grid: &SampleGrid, scale: ColorScale) -> ColorImage {
    let nx = grid.z.len();
    let ny = grid.z.first().map_or(0, Vec::len);
    let (z_min, z_max) = grid.z_bounds().unwrap_or((0.0, 1.0));
    let span = if z_max > z_min { z_max - z_min } else { 1.0 };

    let mut pixels = vec![Color32::TRANSPARENT; nx * ny];
    for (i, row) in grid.z.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            if let Some(z) = cell {
                pixels[(ny - 1 - j) * nx + i] = scale.sample((z - z_min) / span);
            }
        }
    }

    ColorImage {
        size: [nx, ny],
        pixels,
    }
}

// ---------------------------------------------------------------------------
// Marching squares
// ---------------------------------------------------------------------------

/// Extract the iso-line segments for one level.  Cells with any absent
/// corner are skipped.  Crossings are linearly interpolated along cell
/// edges; the ambiguous saddle case is split into two arbitrary segments.
pub fn contour_segments(grid: &SampleGrid, level: f64) -> Vec<[[f64; 2]; 2]> {
    let n = grid.resolution();
    let mut segments = Vec::new();

    for i in 0..n {
        for j in 0..n {
            let (Some(z00), Some(z10), Some(z01), Some(z11)) = (
                grid.z[i][j],
                grid.z[i + 1][j],
                grid.z[i][j + 1],
                grid.z[i + 1][j + 1],
            ) else {
                continue;
            };

            let x0 = grid.x_at(i);
            let x1 = grid.x_at(i + 1);
            let y0 = grid.y_at(j);
            let y1 = grid.y_at(j + 1);

            // Crossing points on the four cell edges.
            let mut crossings: Vec<[f64; 2]> = Vec::with_capacity(4);
            let mut edge = |za: f64, zb: f64, a: [f64; 2], b: [f64; 2]| {
                if (za < level) != (zb < level) && za != zb {
                    let t = (level - za) / (zb - za);
                    crossings.push([a[0] + t * (b[0] - a[0]), a[1] + t * (b[1] - a[1])]);
                }
            };
            edge(z00, z10, [x0, y0], [x1, y0]); // bottom
            edge(z10, z11, [x1, y0], [x1, y1]); // right
            edge(z01, z11, [x0, y1], [x1, y1]); // top
            edge(z00, z01, [x0, y0], [x0, y1]); // left

            match crossings.len() {
                2 => segments.push([crossings[0], crossings[1]]),
                4 => {
                    segments.push([crossings[0], crossings[1]]);
                    segments.push([crossings[2], crossings[3]]);
                }
                _ => {}
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sample::{sample_2d, Range};

    #[test]
    fn plane_contour_is_a_straight_diagonal() {
        let grid = sample_2d(|x, y| x + y, Range::new(0.0, 2.0), Range::new(0.0, 2.0), 4);
        let segments = contour_segments(&grid, 2.0);
        assert!(!segments.is_empty());
        // Every crossing of x + y == 2 satisfies the level equation.
        for [a, b] in segments {
            assert!((a[0] + a[1] - 2.0).abs() < 1e-9);
            assert!((b[0] + b[1] - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn level_outside_the_grid_has_no_segments() {
        let grid = sample_2d(|x, y| x + y, Range::new(0.0, 1.0), Range::new(0.0, 1.0), 4);
        assert!(contour_segments(&grid, 100.0).is_empty());
    }

    #[test]
    fn absent_corners_skip_the_cell() {
        let mut grid = sample_2d(|x, y| x + y, Range::new(0.0, 1.0), Range::new(0.0, 1.0), 1);
        grid.z[0][0] = None;
        assert!(contour_segments(&grid, 1.0).is_empty());
    }

    #[test]
    fn heatmap_pixels_cover_the_grid() {
        let grid = sample_2d(|x, y| x * y, Range::new(-1.0, 1.0), Range::new(-1.0, 1.0), 2);
        let image = heatmap_image(&grid, ColorScale::Viridis);
        assert_eq!(image.size, [3, 3]);
        assert!(image.pixels.iter().all(|p| *p != Color32::TRANSPARENT));
        // Top-left pixel is (x_min, y_max) where x·y == -1, the minimum.
        assert_eq!(image.pixels[0], ColorScale::Viridis.sample(0.0));
    }

    #[test]
    fn absent_cells_are_transparent() {
        let grid = sample_2d(
            |x, y| 1.0 / (x * y),
            Range::new(-1.0, 1.0),
            Range::new(-1.0, 1.0),
            2,
        );
        let image = heatmap_image(&grid, ColorScale::Plasma);
        // Centre pixel is the singular (0, 0) cell.
        assert_eq!(image.pixels[1 * 3 + 1], Color32::TRANSPARENT);
    }
}
