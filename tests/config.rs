use customplot::config::{ClickableConfig, DemoConfig};
use customplot::render::MarkerShape;
use customplot::ColorScheme;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("customplot_test_{}_{name}", std::process::id()))
}

#[test]
fn yaml_round_trip() {
    let mut cfg = DemoConfig::default();
    cfg.window_title = "Round trip".to_owned();
    cfg.color_scheme = ColorScheme::Nord;
    cfg.clickable.marker_shape = MarkerShape::Diamond;
    cfg.selection.show_persisted_rectangles = false;
    cfg.parallel.tick_count = 8;

    let path = temp_path("cfg.yaml");
    cfg.save(&path).unwrap();
    let back = DemoConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back, cfg);
}

#[test]
fn json_is_picked_by_extension() {
    let cfg = DemoConfig {
        clickable: ClickableConfig {
            tolerance: 3.5,
            ..ClickableConfig::default()
        },
        ..DemoConfig::default()
    };
    let path = temp_path("cfg.json");
    cfg.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.trim_start().starts_with('{'));
    let back = DemoConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(back.clickable.tolerance, 3.5);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = DemoConfig::load(&temp_path("does_not_exist.yaml")).unwrap_err();
    assert!(matches!(err, customplot::ConfigError::Io { .. }));
}

#[test]
fn malformed_yaml_is_reported() {
    let path = temp_path("bad.yaml");
    std::fs::write(&path, "clickable: [1, 2").unwrap();
    let err = DemoConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, customplot::ConfigError::Yaml(_)));
}
