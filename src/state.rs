use eframe::egui::{Color32, TextureHandle};

use crate::color::{trace_color, ColorScale};
use crate::math::sample::SampleGrid;

// ---------------------------------------------------------------------------
// Application constants (the original CONFIG table)
// ---------------------------------------------------------------------------

pub const DEFAULT_X_MIN: f64 = -10.0;
pub const DEFAULT_X_MAX: f64 = 10.0;
pub const DEFAULT_RESOLUTION: usize = 1000;
/// Hard ceiling on sweep work per plot request.
pub const MAX_RESOLUTION: usize = 5000;
/// Side resolution of the 2-D sample grid.
pub const GRID_RESOLUTION: usize = 50;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Basic,
    Advanced,
    Surface,
    Multi,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Basic, Tab::Advanced, Tab::Surface, Tab::Multi];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Basic => "Basic",
            Tab::Advanced => "Advanced",
            Tab::Surface => "3D Surface",
            Tab::Multi => "Multi-Function",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-tab input state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveStyle {
    Lines,
    Markers,
    Both,
}

impl CurveStyle {
    pub const ALL: [CurveStyle; 3] = [CurveStyle::Lines, CurveStyle::Markers, CurveStyle::Both];

    pub fn label(&self) -> &'static str {
        match self {
            CurveStyle::Lines => "Lines",
            CurveStyle::Markers => "Markers",
            CurveStyle::Both => "Lines + Markers",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridView {
    Surface,
    Contour,
    Heatmap,
}

impl GridView {
    pub const ALL: [GridView; 3] = [GridView::Surface, GridView::Contour, GridView::Heatmap];

    pub fn label(&self) -> &'static str {
        match self {
            GridView::Surface => "Surface",
            GridView::Contour => "Contour",
            GridView::Heatmap => "Heatmap",
        }
    }
}

pub struct BasicTab {
    pub equation: String,
    pub x_min: f64,
    pub x_max: f64,
    pub style: CurveStyle,
    pub color: Color32,
}

impl Default for BasicTab {
    fn default() -> Self {
        Self {
            equation: "x^2".to_owned(),
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            style: CurveStyle::Lines,
            color: trace_color(0),
        }
    }
}

pub struct AdvancedTab {
    pub equation: String,
    pub x_min: f64,
    pub x_max: f64,
    pub resolution: usize,
    pub show_derivative: bool,
}

impl Default for AdvancedTab {
    fn default() -> Self {
        Self {
            equation: String::new(),
            x_min: DEFAULT_X_MIN,
            x_max: DEFAULT_X_MAX,
            resolution: DEFAULT_RESOLUTION,
            show_derivative: false,
        }
    }
}

pub struct SurfaceTab {
    pub equation: String,
    /// Textual `min:max` inputs; malformed text falls back to the default
    /// range at plot time rather than surfacing an error.
    pub x_range: String,
    pub y_range: String,
    pub view: GridView,
    pub scale: ColorScale,
}

impl Default for SurfaceTab {
    fn default() -> Self {
        Self {
            equation: String::new(),
            x_range: "-5:5".to_owned(),
            y_range: "-5:5".to_owned(),
            view: GridView::Surface,
            scale: ColorScale::Viridis,
        }
    }
}

pub struct FunctionEntry {
    pub equation: String,
    pub color: Color32,
}

pub struct MultiTab {
    pub functions: Vec<FunctionEntry>,
}

impl Default for MultiTab {
    fn default() -> Self {
        Self {
            functions: vec![FunctionEntry {
                equation: String::new(),
                color: trace_color(0),
            }],
        }
    }
}

// ---------------------------------------------------------------------------
// Plot results (regenerated wholesale on every plot request)
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Trace {
    pub name: String,
    pub color: Color32,
    pub style: CurveStyle,
    pub dashed: bool,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug)]
pub struct CurvePlot {
    pub title: String,
    /// Typeset-style equation label shown above the chart.
    pub display: String,
    pub traces: Vec<Trace>,
    pub show_legend: bool,
}

pub struct GridPlot {
    pub title: String,
    pub display: String,
    pub grid: SampleGrid,
    pub view: GridView,
    pub scale: ColorScale,
    /// Rasterized heatmap, uploaded once per plot request.
    pub texture: Option<TextureHandle>,
}

/// What the central panel shows for one tab.
pub enum PlotView {
    /// Nothing plotted yet.
    Empty,
    Curve(CurvePlot),
    Grid(GridPlot),
    /// A failed request replaces the plot area with its message.
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub current_tab: Tab,
    pub basic: BasicTab,
    pub advanced: AdvancedTab,
    pub surface: SurfaceTab,
    pub multi: MultiTab,
    basic_view: PlotView,
    advanced_view: PlotView,
    surface_view: PlotView,
    multi_view: PlotView,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_tab: Tab::Basic,
            basic: BasicTab::default(),
            advanced: AdvancedTab::default(),
            surface: SurfaceTab::default(),
            multi: MultiTab::default(),
            basic_view: PlotView::Empty,
            advanced_view: PlotView::Empty,
            surface_view: PlotView::Empty,
            multi_view: PlotView::Empty,
        }
    }
}

impl AppState {
    pub fn view(&self, tab: Tab) -> &PlotView {
        match tab {
            Tab::Basic => &self.basic_view,
            Tab::Advanced => &self.advanced_view,
            Tab::Surface => &self.surface_view,
            Tab::Multi => &self.multi_view,
        }
    }

    pub fn set_view(&mut self, tab: Tab, view: PlotView) {
        match tab {
            Tab::Basic => self.basic_view = view,
            Tab::Advanced => self.advanced_view = view,
            Tab::Surface => self.surface_view = view,
            Tab::Multi => self.multi_view = view,
        }
    }
}
