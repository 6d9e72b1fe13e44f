use anyhow::{Context, Result};
use error_basics::logging;
use error_basics::settings::{Settings, SETTINGS_FILE};
use error_basics::shell::Shell;
use std::io;
use std::path::Path;
use tracing::{info, warn};

fn main() -> Result<()> {
    // A broken settings file never stops the lesson
    let (settings, settings_err) = Settings::load_or_fallback(Path::new(SETTINGS_FILE));
    logging::init(&settings.log_filter);
    if let Some(err) = settings_err {
        warn!(error = %err, "using default settings");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = Shell::new(stdin.lock(), stdout.lock(), settings.color)
        .run()
        .context("Failed to talk to the terminal")?;

    info!(?summary, "session finished");
    Ok(())
}
