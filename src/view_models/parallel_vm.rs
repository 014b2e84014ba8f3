use std::sync::mpsc::Receiver;

use eframe::egui::Color32;
use egui_phosphor::regular;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::commands::{CommandSource, RelayCommand};
use crate::data::color_scale::{ColorScale, ColorStop};
use crate::events::{EventController, EventFilter, EventKind, SeriesEvent};
use crate::series::parallel::TooltipFormatter;
use crate::series::{Dimension, ParallelCoordinatesConfig, ParallelCoordinatesSeries, TooltipStyle};

pub const SAMPLES_PER_SPECIES: usize = 30;
const SAMPLE_SEED: u64 = 42;

/// `(species value, [(min, span); 4])` for sepal length/width and petal
/// length/width.
const SPECIES: [(f64, [(f64, f64); 4]); 3] = [
    (0.0, [(4.5, 1.2), (2.9, 1.0), (1.0, 0.8), (0.1, 0.3)]),
    (0.5, [(5.5, 1.5), (2.5, 0.8), (3.8, 1.4), (1.0, 0.8)]),
    (1.0, [(6.0, 1.5), (2.7, 0.8), (4.8, 1.7), (1.8, 0.7)]),
];

const DIMENSION_LABELS: [&str; 4] = ["Sepal_Length", "Sepal_Width", "Petal_Length", "Petal_Width"];
const READABLE_LABELS: [&str; 4] = ["Sepal length", "Sepal width", "Petal length", "Petal width"];

pub struct ParallelCoordinatesViewModel {
    pub series: ParallelCoordinatesSeries,
    pub title: String,
    pub status: String,
    events: Receiver<SeriesEvent>,
}

impl ParallelCoordinatesViewModel {
    pub fn new(config: ParallelCoordinatesConfig) -> Self {
        let controller = EventController::new();
        let events = controller.subscribe(EventFilter::only(
            EventKind::LINE_SELECTED | EventKind::HIGHLIGHT_RESET,
        ));
        let mut series = ParallelCoordinatesSeries::new(config, controller);
        let (dimensions, species) = iris_like_sample();
        let title = format!("Iris Dataset ({} samples - Color by Species)", species.len());
        series.set_dimensions(dimensions);
        series.set_color_mapping(Some(species), Some(species_scale()));
        Self {
            series,
            title,
            status: "Hover a line to highlight it, click to select.".to_owned(),
            events,
        }
    }

    pub fn pump_events(&mut self) -> usize {
        let mut n = 0;
        while let Ok(ev) = self.events.try_recv() {
            n += 1;
            if ev.kinds.contains(EventKind::HIGHLIGHT_RESET) {
                self.status = "Highlight and selection reset.".to_owned();
            } else if ev.kinds.contains(EventKind::LINE_SELECTED) {
                self.status = match ev.line {
                    Some(line) => format!("Line {line} selected."),
                    None => "Selection cleared.".to_owned(),
                };
            }
        }
        n
    }

    pub fn reset(&mut self) {
        self.series.reset_highlight_and_selection();
    }

    pub fn use_default_tooltip(&mut self) {
        self.series.set_tooltip_formatter(None);
        self.series.set_tooltip_style(TooltipStyle::default());
    }

    pub fn use_custom_tooltip(&mut self) {
        self.series.set_tooltip_formatter(Some(species_tooltip()));
    }

    pub fn change_tooltip_style(&mut self) {
        self.series.set_tooltip_style(TooltipStyle {
            background: Color32::from_rgba_unmultiplied(30, 30, 60, 220),
            border: Color32::GOLD,
            border_thickness: 2.0,
            text: Color32::WHITE,
            bold: true,
        });
    }
}

impl CommandSource for ParallelCoordinatesViewModel {
    fn commands() -> Vec<RelayCommand<Self>> {
        vec![
            RelayCommand::new("Reset", regular::ARROW_CLOCKWISE, Self::reset),
            RelayCommand::new("Default tooltip", regular::CHAT_TEXT, Self::use_default_tooltip),
            RelayCommand::new("Custom tooltip", regular::CHAT_CIRCLE_TEXT, Self::use_custom_tooltip),
            RelayCommand::new("Change tooltip style", regular::PAINT_BRUSH, Self::change_tooltip_style),
        ]
    }
}

impl Default for ParallelCoordinatesViewModel {
    fn default() -> Self {
        let config = ParallelCoordinatesConfig {
            line_color: Color32::from_rgb(70, 130, 180),
            line_thickness: 1.5,
            line_opacity: 0.7,
            ..ParallelCoordinatesConfig::default()
        };
        Self::new(config)
    }
}

/// Three species of 30 seeded samples each, plus the per-line species value.
pub fn iris_like_sample() -> (Vec<Dimension>, Vec<f64>) {
    let mut rng = SmallRng::seed_from_u64(SAMPLE_SEED);
    let mut columns: [Vec<f64>; 4] = Default::default();
    let mut species = Vec::with_capacity(SPECIES.len() * SAMPLES_PER_SPECIES);
    for (value, ranges) in SPECIES {
        for _ in 0..SAMPLES_PER_SPECIES {
            for (col, (min, span)) in columns.iter_mut().zip(ranges) {
                col.push(min + rng.random::<f64>() * span);
            }
            species.push(value);
        }
    }
    let dimensions = DIMENSION_LABELS
        .iter()
        .zip(columns)
        .map(|(label, values)| Dimension::new(*label, values))
        .collect();
    (dimensions, species)
}

fn species_scale() -> ColorScale {
    ColorScale::new([
        ColorStop::new(0.0, Color32::RED),
        ColorStop::new(0.5, Color32::GREEN),
        ColorStop::new(1.0, Color32::BLUE),
    ])
}

fn species_name(value: f64) -> &'static str {
    match value {
        v if v == 0.0 => "Iris Setosa",
        v if v == 0.5 => "Iris Versicolor",
        v if v == 1.0 => "Iris Virginica",
        _ => "Unknown Species",
    }
}

fn species_tooltip() -> TooltipFormatter {
    Box::new(|line, dimensions, colors| {
        let mut lines = Vec::new();
        match colors.and_then(|c| c.get(line)) {
            Some(&v) => lines.push(species_name(v).to_owned()),
            None => lines.push(format!("Data point {line}")),
        }
        lines.push("───────────────".to_owned());
        for (dim, label) in dimensions.iter().zip(READABLE_LABELS) {
            if let Some(v) = dim.values.get(line) {
                lines.push(format!("• {label}: {v:.1} cm"));
            }
        }
        lines.join("\n")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_three_species() {
        let (dims, species) = iris_like_sample();
        assert_eq!(dims.len(), 4);
        assert_eq!(species.len(), 90);
        assert!(dims.iter().all(|d| d.values.len() == 90));
        assert_eq!(species[0], 0.0);
        assert_eq!(species[45], 0.5);
        assert_eq!(species[89], 1.0);
        // setosa petal length stays in [1.0, 1.8)
        assert!(dims[2].values[..30].iter().all(|v| (1.0..1.8).contains(v)));
    }

    #[test]
    fn custom_tooltip_names_species() {
        let mut vm = ParallelCoordinatesViewModel::default();
        assert!(!vm.series.has_custom_tooltip());
        ParallelCoordinatesViewModel::command("Custom tooltip")
            .unwrap()
            .execute(&mut vm);
        assert!(vm.series.has_custom_tooltip());
        let text = vm.series.tooltip_text(31);
        assert!(text.starts_with("Iris Versicolor\n"));
        assert!(text.contains("• Petal width: "));
        assert!(text.ends_with(" cm"));

        vm.use_default_tooltip();
        assert!(vm.series.tooltip_text(0).starts_with("Data Point 0"));
    }

    #[test]
    fn style_command_makes_tooltip_bold() {
        let mut vm = ParallelCoordinatesViewModel::default();
        vm.change_tooltip_style();
        assert!(vm.series.tooltip_style.bold);
        assert_eq!(vm.series.tooltip_style.border, Color32::GOLD);
    }
}
