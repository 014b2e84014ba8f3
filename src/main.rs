use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use customplot::{run_demo, DemoConfig};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // optional first argument: path to a .yaml/.json config
    let loaded = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => DemoConfig::load(&path),
        None => DemoConfig::load_from_default_path(),
    };
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default settings");
        DemoConfig::default()
    });

    tracing::info!("starting customplot demo");
    run_demo(config)
}
