use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ctr_playtime_lib::{GameCatalog, Settings};

use crate::CliError;

/// Run the scan command.
pub(crate) fn run_scan(settings: &Settings) -> Result<(), CliError> {
    let root = settings.roms_root();
    log::info!("Scanning: {}", root.display());
    crate::log_blank();

    let catalog = GameCatalog::build(&root);

    for record in &catalog {
        log::info!(
            "  {}  {}",
            record.program_id.if_supports_color(Stdout, |t| t.cyan()),
            record.title.if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!(
            "              {}",
            record.path.display().if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if !catalog.is_empty() {
        crate::log_blank();
    }
    log::info!(
        "{} games, {} other files skipped",
        catalog.len(),
        catalog.rejected()
    );
    Ok(())
}
