use customplot::data::export::{save_selection_csv, write_points_csv, ExportError};
use customplot::series::PointRecord;
use customplot::view_models::RectSelectionViewModel;
use customplot::{LinearTransform, ScreenPoint, ScreenRect};

#[test]
fn writes_expected_csv() {
    let rows = [
        (0, PointRecord::new(1.0, 2.0, 5.5)),
        (7, PointRecord::new(-0.25, 10.0, 9.0)),
    ];
    let mut buf = Vec::new();
    write_points_csv(&mut buf, &rows).unwrap();
    let s = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = s.trim().split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "index,x,y,size");
    assert!(lines[2].starts_with("7,-0.250000000,10.000000000,"));
}

#[test]
fn empty_selection_is_not_written() {
    let path = std::env::temp_dir().join("customplot_never_written.csv");
    std::fs::remove_file(&path).ok();
    assert!(matches!(save_selection_csv(&path, &[]), Err(ExportError::Empty)));
    assert!(!path.exists());
}

#[test]
fn view_model_exports_its_selection() {
    let mut vm = RectSelectionViewModel::default();
    let t = LinearTransform::new(ScreenRect::new(0.0, 0.0, 100.0, 100.0), [0.0, 100.0], [0.0, 100.0]);
    vm.series.start_rectangle_selection(ScreenPoint::new(0.0, 0.0), &t);
    vm.series.end_rectangle_selection(ScreenPoint::new(100.0, 100.0), &t);
    vm.pump_events();
    let expected = vm.selected().len();
    assert_eq!(expected, 50);

    let path = std::env::temp_dir().join(format!("customplot_export_{}.csv", std::process::id()));
    let written = vm.export_selection_to(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(written, expected);
    assert_eq!(text.lines().count(), expected + 1);
    assert!(vm.status.starts_with(&format!("Exported {expected} points")));
}
