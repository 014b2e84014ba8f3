use std::time::{Duration, Instant};

use customplot::behaviors::{PointerEvent, PointerKind, RectSelectionBehavior, DRAG_UPDATE_INTERVAL};
use customplot::events::{EventFilter, EventKind};
use customplot::series::{PointRecord, RectSelectionConfig, RectSelectionScatterSeries};
use customplot::{EventController, LinearTransform, ScreenPoint, ScreenRect};

// 100 px per 10 data units, y up
fn transform() -> LinearTransform {
    LinearTransform::new(ScreenRect::new(0.0, 0.0, 100.0, 100.0), [0.0, 10.0], [0.0, 10.0])
}

fn series(events: &EventController) -> RectSelectionScatterSeries {
    let mut s = RectSelectionScatterSeries::new(RectSelectionConfig::default(), events.clone());
    s.set_points([
        PointRecord::new(1.0, 1.0, 6.0),
        PointRecord::new(3.0, 3.0, 6.0),
        PointRecord::new(5.0, 5.0, 6.0),
        PointRecord::new(8.0, 2.0, 6.0),
        PointRecord::new(f64::NAN, 4.0, 6.0),
    ]);
    s
}

#[test]
fn selection_is_stable_under_corner_order() {
    let t = transform();
    let corners = [
        (ScreenPoint::new(20.0, 80.0), ScreenPoint::new(60.0, 40.0)),
        (ScreenPoint::new(60.0, 40.0), ScreenPoint::new(20.0, 80.0)),
        (ScreenPoint::new(20.0, 40.0), ScreenPoint::new(60.0, 80.0)),
        (ScreenPoint::new(60.0, 80.0), ScreenPoint::new(20.0, 40.0)),
    ];
    let mut results = Vec::new();
    for (a, b) in corners {
        let mut s = series(&EventController::new());
        s.start_rectangle_selection(a, &t);
        s.end_rectangle_selection(b, &t);
        results.push((s.selected_indices(), s.persisted_rectangle()));
    }
    // data rect [2, 6] x [2, 6]; (3,3) and (5,5) inside
    assert_eq!(results[0].0, vec![1, 2]);
    assert!(results.iter().all(|r| r == &results[0]));
}

#[test]
fn rectangle_bounds_are_inclusive() {
    let t = transform();
    let mut s = series(&EventController::new());
    s.start_rectangle_selection(ScreenPoint::new(10.0, 90.0), &t);
    s.end_rectangle_selection(ScreenPoint::new(30.0, 70.0), &t);
    assert_eq!(s.selected_indices(), vec![0, 1]);
}

#[test]
fn new_drag_replaces_previous_selection() {
    let t = transform();
    let events = EventController::new();
    let rx = events.subscribe(EventFilter::only(EventKind::SELECTION_CHANGED));
    let mut s = series(&events);

    s.start_rectangle_selection(ScreenPoint::new(0.0, 100.0), &t);
    s.end_rectangle_selection(ScreenPoint::new(40.0, 60.0), &t);
    assert_eq!(s.selected_indices(), vec![0, 1]);

    s.start_rectangle_selection(ScreenPoint::new(70.0, 90.0), &t);
    assert_eq!(s.selected_count(), 0);
    assert!(s.persisted_rectangle().is_none());
    s.end_rectangle_selection(ScreenPoint::new(90.0, 70.0), &t);
    assert_eq!(s.selected_indices(), vec![3]);

    let sizes: Vec<usize> = rx.try_iter().filter_map(|e| e.selection).map(|m| m.indices.len()).collect();
    assert_eq!(sizes, vec![2, 1]);
}

#[test]
fn behavior_throttles_and_clamps() {
    let t = transform();
    let mut s = series(&EventController::new());
    let mut b = RectSelectionBehavior::default();
    let t0 = Instant::now();
    let ev = |kind, x, y, ms: u64| PointerEvent::new(kind, ScreenPoint::new(x, y), true, t0 + Duration::from_millis(ms));

    assert!(b.handle(&ev(PointerKind::Down, 10.0, 10.0, 0), &mut [&mut s], &t).consumed());
    assert!(s.is_selecting());

    b.handle(&ev(PointerKind::Move, 50.0, 50.0, 1), &mut [&mut s], &t);
    assert_eq!(s.live_rectangle().map(|r| r.width), Some(40.0));

    // inside the throttle window: ignored
    b.handle(&ev(PointerKind::Move, 60.0, 60.0, 5), &mut [&mut s], &t);
    assert_eq!(s.live_rectangle().map(|r| r.width), Some(40.0));

    // outside the plot: clamped to the edge
    let later = 1 + DRAG_UPDATE_INTERVAL.as_millis() as u64;
    b.handle(&ev(PointerKind::Move, 250.0, 40.0, later), &mut [&mut s], &t);
    assert_eq!(s.live_rectangle().map(|r| r.right()), Some(100.0));

    b.handle(&ev(PointerKind::Up, 250.0, 90.0, later + 1), &mut [&mut s], &t);
    assert!(!b.is_dragging());
    assert!(!s.is_selecting());
    // data rect [1, 10] x [1, 9]
    assert_eq!(s.selected_indices(), vec![0, 1, 2, 3]);
}

#[test]
fn release_without_shift_drops_the_drag() {
    let t = transform();
    let mut s = series(&EventController::new());
    let mut b = RectSelectionBehavior::default();
    let now = Instant::now();
    b.handle(&PointerEvent::new(PointerKind::Down, ScreenPoint::new(0.0, 0.0), true, now), &mut [&mut s], &t);
    b.handle(&PointerEvent::new(PointerKind::Leave, ScreenPoint::new(120.0, 50.0), true, now), &mut [&mut s], &t);
    assert!(s.is_selecting());
    b.handle(&PointerEvent::new(PointerKind::Up, ScreenPoint::new(100.0, 100.0), false, now), &mut [&mut s], &t);
    assert!(!s.is_selecting());
    assert_eq!(s.selected_count(), 0);
    assert!(s.persisted_rectangle().is_none());
}

#[test]
fn disabled_selection_ignores_drags() {
    let t = transform();
    let mut s = series(&EventController::new());
    s.set_selection_enabled(false);
    s.start_rectangle_selection(ScreenPoint::new(0.0, 0.0), &t);
    assert!(!s.is_selecting());
    s.select_point(99);
    assert_eq!(s.selected_count(), 0);
}
