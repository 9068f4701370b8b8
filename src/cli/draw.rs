use crate::config::DrawConfig;
use crate::error::{RaffleError, Result};
use crate::loader::CsvSource;
use crate::raffle::{DrawReport, Raffle};
use crate::seed::DrawSeed;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for the draw command
#[derive(Debug, Clone, Default)]
pub struct DrawOptions {
    pub config: DrawConfig,
    /// Replay a published draw; a fresh seed is generated when absent
    pub seed: Option<i64>,
    /// Write the recorded transcript here for publishing next to the digest
    pub transcript: Option<PathBuf>,
}

/// Draw winners from an attendee export
pub fn run_draw(input: &Path, options: &DrawOptions) -> Result<DrawReport> {
    if input.as_os_str().is_empty() {
        return Err(RaffleError::MissingInput);
    }

    info!("Running with {}", input.display());

    let raffle = Raffle::new(options.config.clone())?;
    let effective = serde_json::to_string(raffle.config())?;
    debug!(config = %effective, "effective draw config");
    let mut source = CsvSource::new(input, raffle.config())?;
    source.check_readable()?;

    let seed = options.seed.map(DrawSeed::new).unwrap_or_else(DrawSeed::generate);
    let report = raffle.run(&mut source, seed)?;

    if let Some(path) = &options.transcript {
        std::fs::write(path, report.transcript.as_str())?;
        info!("Transcript written to {}", path.display());
    }

    Ok(report)
}

/// Tab-separated exports default to a tab delimiter
pub fn delimiter_for(input: &Path) -> char {
    match input.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => '\t',
        _ => ',',
    }
}
