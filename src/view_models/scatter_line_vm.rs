use crate::commands::{CommandSource, RelayCommand};
use crate::series::{ErrorPoint, ScatterLineConfig, ScatterLineSeries};

const SEED_POINTS: [(f64, f64, f64, f64); 4] = [
    (0.0, 0.0, 0.4, 0.2),
    (1.0, 1.0, 0.3, 0.4),
    (2.0, 0.5, 0.2, 0.3),
    (3.0, 1.2, 0.5, 0.2),
];

/// Static demo: the series has no interaction, only a reset command.
pub struct ScatterLineViewModel {
    pub series: ScatterLineSeries,
}

impl ScatterLineViewModel {
    pub fn new(config: ScatterLineConfig) -> Self {
        let mut vm = Self {
            series: ScatterLineSeries::new(config),
        };
        vm.reset_points();
        vm
    }

    pub fn reset_points(&mut self) {
        self.series.set_points(
            SEED_POINTS
                .iter()
                .map(|&(x, y, ex, ey)| ErrorPoint::new(x, y, ex, ey))
                .collect(),
        );
    }
}

impl CommandSource for ScatterLineViewModel {
    fn commands() -> Vec<RelayCommand<Self>> {
        vec![RelayCommand::new(
            "Reset points",
            egui_phosphor::regular::ARROW_CLOCKWISE,
            Self::reset_points,
        )]
    }
}

impl Default for ScatterLineViewModel {
    fn default() -> Self {
        Self::new(ScatterLineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::InteractiveSeries;

    #[test]
    fn seeded_with_four_error_points() {
        let vm = ScatterLineViewModel::default();
        assert_eq!(vm.series.points().len(), 4);
        assert_eq!(vm.series.points()[3], ErrorPoint::new(3.0, 1.2, 0.5, 0.2));
        let [x0, _, x1, _] = vm.series.data_bounds().unwrap();
        assert_eq!((x0, x1), (-0.4, 3.5));
    }
}
