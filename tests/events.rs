use customplot::events::{EventFilter, EventKind};
use customplot::series::{ClickableScatterConfig, ClickableScatterSeries, RectSelectionConfig, RectSelectionScatterSeries};
use customplot::{EventController, LinearTransform, ScreenPoint, ScreenRect};

#[test]
fn one_controller_feeds_filtered_subscribers() {
    let events = EventController::new();
    let clicks = events.subscribe(EventFilter::only(EventKind::POINT_ADDED | EventKind::POINT_CLICKED));
    let selections = events.subscribe(EventFilter::only(EventKind::RECT_SELECTION_ENDED));
    let everything = events.subscribe_all();

    let t = LinearTransform::new(ScreenRect::new(0.0, 0.0, 100.0, 100.0), [0.0, 10.0], [0.0, 10.0]);
    let mut scatter = ClickableScatterSeries::new(ClickableScatterConfig::default(), events.clone());
    let mut rect = RectSelectionScatterSeries::new(RectSelectionConfig::default(), events.clone());

    scatter.handle_click(ScreenPoint::new(50.0, 50.0), &t);
    rect.start_rectangle_selection(ScreenPoint::new(0.0, 0.0), &t);
    rect.end_rectangle_selection(ScreenPoint::new(10.0, 10.0), &t);

    assert_eq!(clicks.try_iter().count(), 1);
    let ended: Vec<_> = selections.try_iter().collect();
    assert_eq!(ended.len(), 1);
    assert!(ended[0].kinds.contains(EventKind::SELECTION_CHANGED));
    assert!(ended[0].selection.as_ref().is_some_and(|s| s.indices.is_empty()));
    // added, started, ended
    assert_eq!(everything.try_iter().count(), 3);
}

#[test]
fn dropped_receivers_are_pruned() {
    let events = EventController::new();
    let keep = events.subscribe_all();
    drop(events.subscribe_all());
    assert_eq!(events.subscriber_count(), 2);

    let t = LinearTransform::new(ScreenRect::new(0.0, 0.0, 100.0, 100.0), [0.0, 10.0], [0.0, 10.0]);
    let mut scatter = ClickableScatterSeries::new(ClickableScatterConfig::default(), events.clone());
    scatter.handle_click(ScreenPoint::new(20.0, 20.0), &t);

    assert_eq!(events.subscriber_count(), 1);
    assert_eq!(keep.try_iter().count(), 1);
}
