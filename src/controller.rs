use anyhow::{Context as _, Result};
use eframe::egui;

use crate::math::derivative::central_difference;
use crate::math::expr::{Expression, PlotError};
use crate::math::sample::{parse_range, sample_1d, sample_2d};
use crate::presets;
use crate::state::{
    AppState, AdvancedTab, BasicTab, CurvePlot, CurveStyle, GridPlot, MultiTab, PlotView,
    SurfaceTab, Tab, Trace, DEFAULT_RESOLUTION, DEFAULT_X_MAX, DEFAULT_X_MIN, GRID_RESOLUTION,
    MAX_RESOLUTION,
};
use crate::color;
use crate::ui::display::pretty_equation;
use crate::ui::grid::heatmap_image;

// ---------------------------------------------------------------------------
// Commands – what the UI is allowed to ask for
// ---------------------------------------------------------------------------

/// UI events are collected as commands and dispatched once per frame, so the
/// panels never compute anything themselves.
pub enum Command {
    SwitchTab(Tab),
    Plot(Tab),
    LoadExample { tab: Tab, equation: String },
    AddFunction,
    RemoveFunction(usize),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(state: &mut AppState, ctx: &egui::Context, cmd: Command) {
    match cmd {
        Command::SwitchTab(tab) => {
            state.current_tab = tab;
            // Pre-fill the tab with its first example, as the original did.
            if let Some(first) = presets::for_tab(tab).first() {
                set_equation(state, tab, first.equation.to_owned());
            }
        }
        Command::LoadExample { tab, equation } => {
            set_equation(state, tab, equation);
            plot(state, ctx, tab);
        }
        Command::Plot(tab) => plot(state, ctx, tab),
        Command::AddFunction => {
            let functions = &mut state.multi.functions;
            functions.push(crate::state::FunctionEntry {
                equation: String::new(),
                color: color::trace_color(functions.len()),
            });
        }
        Command::RemoveFunction(index) => {
            let functions = &mut state.multi.functions;
            // The last row always stays.
            if functions.len() > 1 && index < functions.len() {
                functions.remove(index);
            }
        }
    }
}

fn set_equation(state: &mut AppState, tab: Tab, equation: String) {
    match tab {
        Tab::Basic => state.basic.equation = equation,
        Tab::Advanced => state.advanced.equation = equation,
        Tab::Surface => state.surface.equation = equation,
        Tab::Multi => {
            if let Some(first) = state.multi.functions.first_mut() {
                first.equation = equation;
            }
        }
    }
}

fn plot(state: &mut AppState, ctx: &egui::Context, tab: Tab) {
    let view = match tab {
        Tab::Basic => build_basic(&state.basic).map(PlotView::Curve),
        Tab::Advanced => build_advanced(&state.advanced).map(PlotView::Curve),
        Tab::Surface => build_surface(&state.surface).map(|mut plot| {
            // Rasterize once per request; the renderer only blits it.
            let image = heatmap_image(&plot.grid, plot.scale);
            plot.texture = Some(ctx.load_texture(
                "surface_heatmap",
                image,
                egui::TextureOptions::LINEAR,
            ));
            PlotView::Grid(plot)
        }),
        Tab::Multi => build_multi(&state.multi).map(PlotView::Curve),
    };

    match view {
        Ok(view) => state.set_view(tab, view),
        Err(e) => {
            log::error!("plot request for {} failed: {e:#}", tab.label());
            state.set_view(tab, PlotView::Error(format!("{e:#}")));
        }
    }
}

// ---------------------------------------------------------------------------
// Plot builders
// ---------------------------------------------------------------------------

fn build_basic(tab: &BasicTab) -> Result<CurvePlot> {
    let points = sweep(&tab.equation, tab.x_min, tab.x_max, DEFAULT_RESOLUTION)?;
    log::info!("plotted {} points for `{}`", points.len(), tab.equation);

    Ok(CurvePlot {
        title: format!("Graph of y = {}", tab.equation),
        display: pretty_equation("y", &tab.equation),
        traces: vec![Trace {
            name: format!("y = {}", tab.equation),
            color: tab.color,
            style: tab.style,
            dashed: false,
            points,
        }],
        show_legend: false,
    })
}

fn build_advanced(tab: &AdvancedTab) -> Result<CurvePlot> {
    let resolution = tab.resolution.clamp(1, MAX_RESOLUTION);
    let points = sweep(&tab.equation, tab.x_min, tab.x_max, resolution)?;

    let mut traces = vec![Trace {
        name: "f(x)".to_owned(),
        color: color::trace_color(0),
        style: CurveStyle::Lines,
        dashed: false,
        points,
    }];

    if tab.show_derivative && traces[0].points.len() > 1 {
        let derivative = central_difference(&traces[0].points);
        log::info!(
            "derivative of `{}`: {} midpoint samples",
            tab.equation,
            derivative.len()
        );
        traces.push(Trace {
            name: "f'(x)".to_owned(),
            color: color::DERIVATIVE_COLOR,
            style: CurveStyle::Lines,
            dashed: true,
            points: derivative,
        });
    }

    Ok(CurvePlot {
        title: format!("Advanced Analysis: {}", tab.equation),
        display: pretty_equation("y", &tab.equation),
        traces,
        show_legend: tab.show_derivative,
    })
}

fn build_surface(tab: &SurfaceTab) -> Result<GridPlot> {
    let x_range = parse_range(&tab.x_range);
    let y_range = parse_range(&tab.y_range);

    let expr = Expression::compile(&tab.equation)
        .with_context(|| format!("in `{}`", tab.equation))?;
    let f = expr
        .bind_xy()
        .with_context(|| format!("in `{}`", tab.equation))?;

    let grid = sample_2d(f, x_range, y_range, GRID_RESOLUTION);
    if !grid.has_values() {
        return Err(PlotError::NoValidPoints)
            .with_context(|| format!("in `{}`", tab.equation));
    }
    log::info!(
        "sampled {0}×{0} grid for `{1}`",
        grid.resolution() + 1,
        tab.equation
    );

    Ok(GridPlot {
        title: format!("{}: z = {}", tab.view.label(), tab.equation),
        display: pretty_equation("z", &tab.equation),
        grid,
        view: tab.view,
        scale: tab.scale,
        texture: None,
    })
}

fn build_multi(tab: &MultiTab) -> Result<CurvePlot> {
    let mut traces = Vec::new();

    for entry in &tab.functions {
        let equation = entry.equation.trim();
        if equation.is_empty() {
            continue;
        }
        // A bad function is skipped, not fatal for the whole plot.
        match sweep(equation, DEFAULT_X_MIN, DEFAULT_X_MAX, DEFAULT_RESOLUTION) {
            Ok(points) => traces.push(Trace {
                name: equation.to_owned(),
                color: entry.color,
                style: CurveStyle::Lines,
                dashed: false,
                points,
            }),
            Err(e) => log::warn!("skipping `{equation}`: {e:#}"),
        }
    }

    if traces.is_empty() {
        return Err(PlotError::NoValidFunctions.into());
    }

    Ok(CurvePlot {
        title: "Multi-Function Plot".to_owned(),
        display: String::new(),
        traces,
        show_legend: true,
    })
}

/// Compile, bind `x`, and sample; an all-dropped sweep is an error.
fn sweep(equation: &str, x_min: f64, x_max: f64, resolution: usize) -> Result<Vec<[f64; 2]>> {
    let run = || -> Result<Vec<[f64; 2]>, PlotError> {
        let expr = Expression::compile(equation)?;
        let f = expr.bind_x()?;
        let points = sample_1d(f, x_min, x_max, resolution);
        if points.is_empty() {
            return Err(PlotError::NoValidPoints);
        }
        Ok(points)
    };
    run().with_context(|| format!("in `{equation}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_does_not_abort_the_sweep() {
        let tab = BasicTab {
            equation: "1/x".to_owned(),
            x_min: -5.0,
            x_max: 5.0,
            ..BasicTab::default()
        };
        let plot = build_basic(&tab).unwrap();
        // x == 0 lands on the grid and is dropped; everything else survives.
        assert_eq!(plot.traces[0].points.len(), DEFAULT_RESOLUTION);
        assert!(plot.traces[0].points.iter().all(|p| p[1].is_finite()));
    }

    #[test]
    fn all_points_invalid_is_an_empty_result_error() {
        let tab = BasicTab {
            equation: "sqrt(-1 - x^2)".to_owned(),
            ..BasicTab::default()
        };
        let err = build_basic(&tab).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlotError>(),
            Some(PlotError::NoValidPoints)
        ));
    }

    #[test]
    fn parse_failure_is_typed() {
        let tab = BasicTab {
            equation: "x^2 +".to_owned(),
            ..BasicTab::default()
        };
        let err = build_basic(&tab).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlotError>(),
            Some(PlotError::Parse(_))
        ));
    }

    #[test]
    fn derivative_overlay_is_dashed_and_named() {
        let tab = AdvancedTab {
            equation: "x^2".to_owned(),
            show_derivative: true,
            ..AdvancedTab::default()
        };
        let plot = build_advanced(&tab).unwrap();
        assert_eq!(plot.traces.len(), 2);
        assert_eq!(plot.traces[1].name, "f'(x)");
        assert!(plot.traces[1].dashed);
        assert!(plot.show_legend);
    }

    #[test]
    fn resolution_is_clamped_to_the_ceiling() {
        let tab = AdvancedTab {
            equation: "x".to_owned(),
            resolution: 1_000_000,
            ..AdvancedTab::default()
        };
        let plot = build_advanced(&tab).unwrap();
        assert_eq!(plot.traces[0].points.len(), MAX_RESOLUTION + 1);
    }

    #[test]
    fn surface_uses_default_range_for_garbage_text() {
        let tab = SurfaceTab {
            equation: "x + y".to_owned(),
            x_range: "nonsense".to_owned(),
            y_range: "0:2".to_owned(),
            ..SurfaceTab::default()
        };
        let plot = build_surface(&tab).unwrap();
        assert_eq!(plot.grid.x.min, -5.0);
        assert_eq!(plot.grid.x.max, 5.0);
        assert_eq!(plot.grid.y.min, 0.0);
        assert_eq!(plot.grid.z.len(), GRID_RESOLUTION + 1);
    }

    #[test]
    fn multi_skips_bad_functions_but_keeps_good_ones() {
        let tab = MultiTab {
            functions: vec![
                crate::state::FunctionEntry {
                    equation: "sin(x)".to_owned(),
                    color: color::trace_color(0),
                },
                crate::state::FunctionEntry {
                    equation: "not a function ((".to_owned(),
                    color: color::trace_color(1),
                },
                crate::state::FunctionEntry {
                    equation: String::new(),
                    color: color::trace_color(2),
                },
            ],
        };
        let plot = build_multi(&tab).unwrap();
        assert_eq!(plot.traces.len(), 1);
        assert_eq!(plot.traces[0].name, "sin(x)");
    }

    #[test]
    fn multi_with_nothing_valid_errors() {
        let tab = MultiTab {
            functions: vec![crate::state::FunctionEntry {
                equation: "((".to_owned(),
                color: color::trace_color(0),
            }],
        };
        let err = build_multi(&tab).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PlotError>(),
            Some(PlotError::NoValidFunctions)
        ));
    }
}
