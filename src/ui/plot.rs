use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points};

use crate::state::{AppState, CurvePlot, CurveStyle, PlotView};
use crate::ui::grid;

// ---------------------------------------------------------------------------
// Central panel – the plot area for the current tab
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    match state.view(state.current_tab) {
        PlotView::Empty => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Enter an equation and press Plot");
            });
        }
        PlotView::Error(message) => error_panel(ui, message),
        PlotView::Curve(plot) => {
            header(ui, &plot.title, &plot.display);
            curve_plot(ui, plot);
        }
        PlotView::Grid(plot) => {
            header(ui, &plot.title, &plot.display);
            grid::grid_plot(ui, plot);
        }
    }
}

fn header(ui: &mut Ui, title: &str, display: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(title);
        if !display.is_empty() {
            ui.label(RichText::new(display).italics().size(18.0));
        }
    });
    ui.add_space(4.0);
}

fn error_panel(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.heading(RichText::new("⚠ Error").color(Color32::RED));
            ui.label(message);
            ui.small("Check the equation syntax and range, then try again.");
        });
    });
}

// ---------------------------------------------------------------------------
// Curve rendering
// ---------------------------------------------------------------------------

fn curve_plot(ui: &mut Ui, plot: &CurvePlot) {
    let mut chart = Plot::new("curve_plot")
        .x_axis_label("x")
        .y_axis_label("y")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if plot.show_legend {
        chart = chart.legend(Legend::default());
    }

    chart.show(ui, |plot_ui| {
        for trace in &plot.traces {
            let lines = matches!(trace.style, CurveStyle::Lines | CurveStyle::Both);
            let markers = matches!(trace.style, CurveStyle::Markers | CurveStyle::Both);

            if lines {
                let points: PlotPoints = trace.points.iter().copied().collect();
                let mut line = Line::new(points)
                    .name(&trace.name)
                    .color(trace.color)
                    .width(2.0);
                if trace.dashed {
                    line = line.style(LineStyle::dashed_loose());
                }
                plot_ui.line(line);
            }
            if markers {
                let points: PlotPoints = trace.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&trace.name)
                        .color(trace.color)
                        .radius(2.0),
                );
            }
        }
    });
}
