use dropdeck_core::{AppConfig, DropdeckResult};
use dropdeck_domain::ProjectStore;
use dropdeck_tui::App;

/// Route debug logs to a file when `DROPDECK_DEBUG_LOG` is set so they
/// do not fight the TUI for the terminal; otherwise only warnings go to
/// stderr.
fn init_tracing() -> DropdeckResult<()> {
    if let Ok(log_path) = std::env::var("DROPDECK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = AppConfig::load();
    // The one store for the process; everything downstream sees it
    // through the app.
    let store = ProjectStore::new();

    let mut app = App::new(store, config);
    app.run().await
}
