use eframe::egui::{self, DragValue, Key, RichText, ScrollArea, TextEdit, Ui};

use crate::controller::Command;
use crate::presets;
use crate::state::{AppState, CurveStyle, GridView, PlotView, Tab, MAX_RESOLUTION};
use crate::color::ColorScale;

// ---------------------------------------------------------------------------
// Top bar – tab strip
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState, commands: &mut Vec<Command>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("FuncViz");
        ui.separator();

        for tab in Tab::ALL {
            if ui
                .selectable_label(state.current_tab == tab, tab.label())
                .clicked()
                && state.current_tab != tab
            {
                commands.push(Command::SwitchTab(tab));
            }
        }

        ui.separator();
        if let PlotView::Curve(plot) = state.view(state.current_tab) {
            let n: usize = plot.traces.iter().map(|t| t.points.len()).sum();
            ui.label(format!("{} trace(s), {n} points", plot.traces.len()));
        }
    });
}

// ---------------------------------------------------------------------------
// Side panel – controls for the current tab
// ---------------------------------------------------------------------------

pub fn side_panel(ui: &mut Ui, state: &mut AppState, commands: &mut Vec<Command>) {
    let tab = state.current_tab;

    ui.heading(tab.label());
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            match tab {
                Tab::Basic => basic_controls(ui, state, commands),
                Tab::Advanced => advanced_controls(ui, state, commands),
                Tab::Surface => surface_controls(ui, state, commands),
                Tab::Multi => multi_controls(ui, state, commands),
            }

            ui.add_space(8.0);
            if ui.button(RichText::new("Plot").strong()).clicked() {
                commands.push(Command::Plot(tab));
            }

            examples_section(ui, tab, commands);
        });
}

/// Single-line equation editor; Enter requests a plot.
fn equation_field(ui: &mut Ui, tab: Tab, equation: &mut String, commands: &mut Vec<Command>) {
    ui.strong("Equation");
    let response = ui.add(
        TextEdit::singleline(equation)
            .hint_text("e.g. sin(x)")
            .desired_width(f32::INFINITY),
    );
    if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
        commands.push(Command::Plot(tab));
    }
}

fn range_row(ui: &mut Ui, x_min: &mut f64, x_max: &mut f64) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("x from");
        ui.add(DragValue::new(x_min).speed(0.1));
        ui.label("to");
        ui.add(DragValue::new(x_max).speed(0.1));
    });
}

fn basic_controls(ui: &mut Ui, state: &mut AppState, commands: &mut Vec<Command>) {
    let t = &mut state.basic;
    equation_field(ui, Tab::Basic, &mut t.equation, commands);
    ui.add_space(4.0);
    range_row(ui, &mut t.x_min, &mut t.x_max);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Style");
        egui::ComboBox::from_id_salt("basic_style")
            .selected_text(t.style.label())
            .show_ui(ui, |ui: &mut Ui| {
                for style in CurveStyle::ALL {
                    ui.selectable_value(&mut t.style, style, style.label());
                }
            });
        ui.color_edit_button_srgba(&mut t.color);
    });
}

fn advanced_controls(ui: &mut Ui, state: &mut AppState, commands: &mut Vec<Command>) {
    let t = &mut state.advanced;
    equation_field(ui, Tab::Advanced, &mut t.equation, commands);
    ui.add_space(4.0);
    range_row(ui, &mut t.x_min, &mut t.x_max);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Resolution");
        ui.add(DragValue::new(&mut t.resolution).range(1..=MAX_RESOLUTION));
    });
    ui.checkbox(&mut t.show_derivative, "Show derivative f'(x)");
}

fn surface_controls(ui: &mut Ui, state: &mut AppState, commands: &mut Vec<Command>) {
    let t = &mut state.surface;
    equation_field(ui, Tab::Surface, &mut t.equation, commands);
    ui.add_space(4.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.label("x range");
        ui.add(
            TextEdit::singleline(&mut t.x_range)
                .hint_text("-5:5")
                .desired_width(80.0),
        );
        ui.label("y range");
        ui.add(
            TextEdit::singleline(&mut t.y_range)
                .hint_text("-5:5")
                .desired_width(80.0),
        );
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("View");
        egui::ComboBox::from_id_salt("surface_view")
            .selected_text(t.view.label())
            .show_ui(ui, |ui: &mut Ui| {
                for view in GridView::ALL {
                    ui.selectable_value(&mut t.view, view, view.label());
                }
            });
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Colors");
        egui::ComboBox::from_id_salt("surface_scale")
            .selected_text(t.scale.label())
            .show_ui(ui, |ui: &mut Ui| {
                for scale in ColorScale::ALL {
                    ui.selectable_value(&mut t.scale, scale, scale.label());
                }
            });
    });
}

fn multi_controls(ui: &mut Ui, state: &mut AppState, commands: &mut Vec<Command>) {
    ui.strong("Functions  (x from -10 to 10)");
    let n = state.multi.functions.len();

    for (index, entry) in state.multi.functions.iter_mut().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            let response = ui.add(
                TextEdit::singleline(&mut entry.equation)
                    .hint_text("Enter equation…")
                    .desired_width(160.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                commands.push(Command::Plot(Tab::Multi));
            }
            ui.color_edit_button_srgba(&mut entry.color);
            if n > 1 && ui.small_button("×").clicked() {
                commands.push(Command::RemoveFunction(index));
            }
        });
    }

    if ui.small_button("+ Add function").clicked() {
        commands.push(Command::AddFunction);
    }
}

// ---------------------------------------------------------------------------
// Example buttons
// ---------------------------------------------------------------------------

fn examples_section(ui: &mut Ui, tab: Tab, commands: &mut Vec<Command>) {
    let examples = presets::for_tab(tab);
    if examples.is_empty() {
        return;
    }

    ui.add_space(8.0);
    ui.separator();
    ui.strong("Examples");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for example in examples {
            if ui.small_button(example.name).clicked() {
                commands.push(Command::LoadExample {
                    tab,
                    equation: example.equation.to_owned(),
                });
            }
        }
    });
}
