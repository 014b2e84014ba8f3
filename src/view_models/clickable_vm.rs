use std::sync::mpsc::Receiver;

use crate::commands::{CommandSource, RelayCommand};
use crate::events::{EventController, EventFilter, EventKind, SeriesEvent};
use crate::series::{ClickableScatterConfig, ClickableScatterSeries, PointRecord};

const SEED_POINTS: [(f64, f64); 4] = [(0.0, 0.0), (1.0, 1.0), (2.0, 0.5), (3.0, 1.2)];
const SEED_SIZE: f64 = 8.0;

pub struct ClickableScatterViewModel {
    pub series: ClickableScatterSeries,
    pub status: String,
    events: Receiver<SeriesEvent>,
}

impl ClickableScatterViewModel {
    pub fn new(config: ClickableScatterConfig) -> Self {
        let controller = EventController::new();
        let events = controller.subscribe(EventFilter::only(EventKind::POINT_CLICKED | EventKind::POINT_ADDED));
        let mut series = ClickableScatterSeries::new(config, controller);
        series.set_initial_points(SEED_POINTS.iter().map(|&(x, y)| PointRecord::new(x, y, SEED_SIZE)));
        Self {
            series,
            status: "Click inside the chart to add a new point".to_owned(),
            events,
        }
    }

    /// Apply pending series events to the status line. Returns how many were
    /// handled.
    pub fn pump_events(&mut self) -> usize {
        let mut n = 0;
        while let Ok(ev) = self.events.try_recv() {
            n += 1;
            let Some((_, p)) = ev.point else { continue };
            if ev.kinds.contains(EventKind::POINT_ADDED) {
                self.status = format!("New point added: ({:.2}, {:.2})", p.x, p.y);
            } else if ev.kinds.contains(EventKind::POINT_CLICKED) {
                self.status = format!("Point clicked: ({:.2}, {:.2})", p.x, p.y);
            }
        }
        n
    }

    pub fn points_text(&self) -> String {
        format!("Points: {}", self.series.len())
    }

    pub fn has_added_points(&self) -> bool {
        self.series.added_count() > 0
    }

    pub fn clear_added_points(&mut self) {
        self.series.clear_added_points();
        self.status = "Added points cleared".to_owned();
    }

    pub fn remove_last_added_point(&mut self) {
        if self.series.remove_last_added_point() {
            self.status = "Last added point removed".to_owned();
        }
    }
}

impl CommandSource for ClickableScatterViewModel {
    fn commands() -> Vec<RelayCommand<Self>> {
        vec![
            RelayCommand::new(
                "Clear added points",
                egui_phosphor::regular::TRASH,
                Self::clear_added_points,
            )
            .with_guard(Self::has_added_points),
            RelayCommand::new(
                "Remove last added point",
                egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE,
                Self::remove_last_added_point,
            )
            .with_guard(Self::has_added_points),
        ]
    }
}

impl Default for ClickableScatterViewModel {
    fn default() -> Self {
        Self::new(ClickableScatterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geometry::{ScreenPoint, ScreenRect};
    use crate::data::transform::LinearTransform;

    fn transform() -> LinearTransform {
        LinearTransform::new(ScreenRect::new(0.0, 0.0, 400.0, 200.0), [-1.0, 4.0], [-1.0, 2.0])
    }

    #[test]
    fn starts_with_seed_points() {
        let vm = ClickableScatterViewModel::default();
        assert_eq!(vm.points_text(), "Points: 4");
        assert!(!ClickableScatterViewModel::commands()[0].can_execute(&vm));
    }

    #[test]
    fn added_point_updates_status() {
        let mut vm = ClickableScatterViewModel::default();
        let t = transform();
        assert!(vm.series.handle_click(ScreenPoint::new(380.0, 20.0), &t));
        assert_eq!(vm.pump_events(), 1);
        assert!(vm.status.starts_with("New point added: ("));
        assert_eq!(vm.points_text(), "Points: 5");

        let remove = ClickableScatterViewModel::command("Remove last added point").unwrap();
        assert!(remove.execute(&mut vm));
        assert_eq!(vm.status, "Last added point removed");
        assert!(!remove.can_execute(&vm));
    }
}
