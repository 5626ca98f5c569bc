use eframe::egui;

use crate::controller::{self, Command};
use crate::state::{AppState, Tab};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct FuncVizApp {
    pub state: AppState,
    initialized: bool,
}

impl Default for FuncVizApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
            initialized: false,
        }
    }
}

impl eframe::App for FuncVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands: Vec<Command> = Vec::new();

        // Plot the pre-filled Basic equation on the first frame.
        if !self.initialized {
            self.initialized = true;
            commands.push(Command::Plot(Tab::Basic));
        }

        // ---- Top panel: tab strip ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state, &mut commands);
        });

        // ---- Left side panel: current tab's controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &mut commands);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::central_panel(ui, &self.state);
        });

        for command in commands {
            controller::dispatch(&mut self.state, ctx, command);
        }
    }
}
