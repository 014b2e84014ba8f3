//! Example: driving the rectangle-selection series without a window
//!
//! What it demonstrates
//! - Feeding synthetic pointer events through [`RectSelectionBehavior`] with a
//!   [`LinearTransform`] standing in for the chart.
//! - Subscribing to selection events and exporting the result as CSV.
//!
//! How to run
//! ```bash
//! cargo run --example headless_selection
//! ```

use std::time::{Duration, Instant};

use customplot::behaviors::{PointerEvent, PointerKind, RectSelectionBehavior};
use customplot::view_models::RectSelectionViewModel;
use customplot::{LinearTransform, ScreenPoint, ScreenRect};

fn main() {
    tracing_subscriber::fmt::init();

    let mut vm = RectSelectionViewModel::default();
    let transform = LinearTransform::new(ScreenRect::new(0.0, 0.0, 800.0, 600.0), [0.0, 100.0], [0.0, 100.0]);
    let mut behavior = RectSelectionBehavior::default();

    let t0 = Instant::now();
    let path = [
        (PointerKind::Down, 100.0, 100.0),
        (PointerKind::Move, 250.0, 200.0),
        (PointerKind::Move, 400.0, 300.0),
        (PointerKind::Up, 400.0, 300.0),
    ];
    for (step, (kind, x, y)) in path.into_iter().enumerate() {
        let time = t0 + Duration::from_millis(20 * step as u64);
        let ev = PointerEvent::new(kind, ScreenPoint::new(x, y), true, time);
        behavior.handle(&ev, &mut [&mut vm.series], &transform);
    }
    vm.pump_events();

    println!("{}", vm.status);
    for info in vm.selected() {
        println!("  {info}");
    }

    let out = std::env::temp_dir().join("customplot_selection.csv");
    match vm.export_selection_to(&out) {
        Ok(n) => println!("wrote {n} rows to {}", out.display()),
        Err(e) => eprintln!("export failed: {e}"),
    }
}
