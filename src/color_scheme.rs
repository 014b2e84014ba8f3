//! Window color schemes for the demo application.

use egui::{Color32, Context, Visuals};
use serde::{Deserialize, Serialize};

/// Visual theme applied to the egui context. The chart defaults (black axes,
/// blue markers) are chosen for a light background, hence the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    Dark,
    #[default]
    Light,
    SolarizedLight,
    Nord,
}

impl ColorScheme {
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::Dark,
            ColorScheme::Light,
            ColorScheme::SolarizedLight,
            ColorScheme::Nord,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::SolarizedLight => "Solarized Light",
            ColorScheme::Nord => "Nord",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark | ColorScheme::Nord)
    }

    /// Color for chart decorations (axes, tick labels) that must stay
    /// readable on the panel background.
    pub fn chart_foreground(&self) -> Color32 {
        if self.is_dark() {
            Color32::from_gray(220)
        } else {
            Color32::BLACK
        }
    }

    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::SolarizedLight => {
                let mut v = Visuals::light();
                let base3 = Color32::from_rgb(253, 246, 227);
                let base2 = Color32::from_rgb(238, 232, 213);
                let base00 = Color32::from_rgb(101, 123, 131);
                v.panel_fill = base3;
                v.window_fill = base2;
                v.extreme_bg_color = base3;
                v.faint_bg_color = base2;
                v.override_text_color = Some(base00);
                v.widgets.noninteractive.bg_fill = base2;
                v.widgets.inactive.bg_fill = base2;
                ctx.set_visuals(v);
            }
            ColorScheme::Nord => {
                let mut v = Visuals::dark();
                let polar0 = Color32::from_rgb(46, 52, 64);
                let polar1 = Color32::from_rgb(59, 66, 82);
                let snow0 = Color32::from_rgb(216, 222, 233);
                v.panel_fill = polar0;
                v.window_fill = polar1;
                v.extreme_bg_color = polar0;
                v.faint_bg_color = polar1;
                v.override_text_color = Some(snow0);
                v.widgets.noninteractive.bg_fill = polar1;
                v.widgets.hovered.bg_fill = Color32::from_rgb(76, 86, 106);
                ctx.set_visuals(v);
            }
        }
        tracing::debug!(scheme = self.label(), "color scheme applied");
    }
}
