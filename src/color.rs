use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Default trace colors
// ---------------------------------------------------------------------------

/// Default cycle of trace colours (blue, red, green, purple, orange).
pub const TRACE_COLORS: [Color32; 5] = [
    Color32::from_rgb(0x3b, 0x82, 0xf6),
    Color32::from_rgb(0xef, 0x44, 0x44),
    Color32::from_rgb(0x22, 0xc5, 0x5e),
    Color32::from_rgb(0xa8, 0x55, 0xf7),
    Color32::from_rgb(0xf9, 0x73, 0x16),
];

/// Colour used for a function trace, cycling through [`TRACE_COLORS`].
pub fn trace_color(index: usize) -> Color32 {
    TRACE_COLORS[index % TRACE_COLORS.len()]
}

/// Dashed derivative overlay colour.
pub const DERIVATIVE_COLOR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

// ---------------------------------------------------------------------------
// Colour scales for grid plots
// ---------------------------------------------------------------------------

/// Named colour scales for surface / contour / heatmap views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    Viridis,
    Plasma,
    Hot,
    Cool,
    Rainbow,
}

impl ColorScale {
    pub const ALL: [ColorScale; 5] = [
        ColorScale::Viridis,
        ColorScale::Plasma,
        ColorScale::Hot,
        ColorScale::Cool,
        ColorScale::Rainbow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorScale::Viridis => "Viridis",
            ColorScale::Plasma => "Plasma",
            ColorScale::Hot => "Hot",
            ColorScale::Cool => "Cool",
            ColorScale::Rainbow => "Rainbow",
        }
    }

    /// Map `t` in [0, 1] (clamped) to a colour.
    pub fn sample(&self, t: f64) -> Color32 {
        let t = t.clamp(0.0, 1.0) as f32;
        match self {
            ColorScale::Viridis => sample_stops(&VIRIDIS, t),
            ColorScale::Plasma => sample_stops(&PLASMA, t),
            ColorScale::Hot => sample_stops(&HOT, t),
            ColorScale::Cool => sample_stops(&COOL, t),
            // Hue sweep from blue (240°) down to red (0°).
            ColorScale::Rainbow => {
                let hsl = Hsl::new(240.0 * (1.0 - t), 0.9, 0.5);
                let rgb: Srgb = hsl.into_color();
                to_color32(rgb)
            }
        }
    }
}

type Stop = (f32, f32, f32);

const VIRIDIS: [Stop; 5] = [
    (0.267, 0.005, 0.329),
    (0.229, 0.322, 0.546),
    (0.127, 0.566, 0.551),
    (0.369, 0.789, 0.383),
    (0.993, 0.906, 0.144),
];

const PLASMA: [Stop; 5] = [
    (0.050, 0.030, 0.528),
    (0.494, 0.012, 0.658),
    (0.798, 0.280, 0.470),
    (0.973, 0.586, 0.252),
    (0.940, 0.975, 0.131),
];

const HOT: [Stop; 4] = [
    (0.016, 0.0, 0.0),
    (0.9, 0.05, 0.0),
    (1.0, 0.9, 0.05),
    (1.0, 1.0, 1.0),
];

const COOL: [Stop; 2] = [(0.0, 1.0, 1.0), (1.0, 0.0, 1.0)];

/// Piecewise-linear interpolation between sRGB stops, mixed in linear light.
fn sample_stops(stops: &[Stop], t: f32) -> Color32 {
    let last = stops.len() - 1;
    let pos = t * last as f32;
    let lo = (pos.floor() as usize).min(last);
    let hi = (lo + 1).min(last);
    let frac = pos - lo as f32;

    let a: LinSrgb = Srgb::new(stops[lo].0, stops[lo].1, stops[lo].2).into_linear();
    let b: LinSrgb = Srgb::new(stops[hi].0, stops[hi].1, stops[hi].2).into_linear();
    to_color32(Srgb::from_linear(a.mix(b, frac)))
}

fn to_color32(rgb: Srgb<f32>) -> Color32 {
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hit_the_outer_stops() {
        assert_eq!(ColorScale::Cool.sample(0.0), Color32::from_rgb(0, 255, 255));
        assert_eq!(ColorScale::Cool.sample(1.0), Color32::from_rgb(255, 0, 255));
        assert_eq!(ColorScale::Hot.sample(1.0), Color32::WHITE);
    }

    #[test]
    fn out_of_range_is_clamped() {
        for scale in ColorScale::ALL {
            assert_eq!(scale.sample(-3.0), scale.sample(0.0));
            assert_eq!(scale.sample(7.0), scale.sample(1.0));
        }
    }

    #[test]
    fn trace_colors_cycle() {
        assert_eq!(trace_color(0), trace_color(5));
        assert_eq!(trace_color(2), TRACE_COLORS[2]);
    }
}
