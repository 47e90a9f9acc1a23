// Free-agent comparison tool entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Build the dataset catalog and preflight every dataset
// 4. Run the TUI event loop (blocking until the user quits)

use fa_compare::config;
use fa_compare::data::catalog::{Catalog, DatasetHandle};
use fa_compare::tui;

use anyhow::Context;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Free-agent comparison tool starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 3. Build the catalog and preflight every dataset. A failing dataset
    //    only degrades its own views, so preflight logs and continues.
    let catalog = Catalog::new(config.data_paths);
    for handle in DatasetHandle::ALL {
        match catalog.resolve(handle) {
            Ok(dataset) => info!(
                "{}: {} records, {} metrics",
                handle.name(),
                dataset.len(),
                dataset.schema.metrics.len()
            ),
            Err(e) => warn!("{}: {}", handle.name(), e),
        }
    }

    // 4. Run the TUI event loop (blocking until the user quits)
    tui::run(&catalog)?;

    info!("Free-agent comparison tool shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("facompare.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fa_compare=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
