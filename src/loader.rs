use crate::config::DrawConfig;
use crate::error::{RaffleError, Result};
use crate::participant::ParticipantRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anything that can hand the draw a list of raw participant records
pub trait ParticipantSource {
    /// Load every row. Any failure aborts the draw before it starts.
    fn load(&mut self) -> Result<Vec<ParticipantRecord>>;

    /// Short label for log lines
    fn describe(&self) -> String;
}

/// Column positions to pull out of each row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub name: usize,
    pub id: usize,
    pub entered_at: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::from(&DrawConfig::default())
    }
}

impl From<&DrawConfig> for ColumnLayout {
    fn from(config: &DrawConfig) -> Self {
        Self {
            name: config.name_column,
            id: config.id_column,
            entered_at: config.entered_at_column,
        }
    }
}

impl ColumnLayout {
    /// Missing cells read as blank
    pub fn extract(&self, row: &StringRecord) -> ParticipantRecord {
        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();
        ParticipantRecord {
            id: cell(self.id),
            name: cell(self.name),
            entered_at: cell(self.entered_at),
        }
    }
}

/// Delimited spreadsheet export (CSV/TSV) read by column position
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    layout: ColumnLayout,
    delimiter: u8,
    skip_header: bool,
}

impl CsvSource {
    /// Rejects a config that fails `DrawConfig::validate`
    pub fn new(path: impl Into<PathBuf>, config: &DrawConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            path: path.into(),
            layout: ColumnLayout::from(config),
            delimiter: config.delimiter_byte(),
            skip_header: config.skip_header,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fail early when the file is missing or is not a regular file
    pub fn check_readable(&self) -> Result<()> {
        let meta = std::fs::metadata(&self.path)
            .map_err(|e| RaffleError::UnreadableSource(format!("{}: {}", self.path.display(), e)))?;
        if !meta.is_file() {
            return Err(RaffleError::UnreadableSource(format!(
                "{}: not a regular file",
                self.path.display()
            )));
        }
        Ok(())
    }
}

impl ParticipantSource for CsvSource {
    fn load(&mut self) -> Result<Vec<ParticipantRecord>> {
        self.check_readable()?;
        let file = File::open(&self.path)
            .map_err(|e| RaffleError::UnreadableSource(format!("{}: {}", self.path.display(), e)))?;

        // Rows vary in width in real exports, and the header is skipped by
        // position rather than parsed.
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .delimiter(self.delimiter)
            .from_reader(file);

        let mut total_rows = 0usize;
        let mut records = Vec::new();
        for (row_number, result) in rdr.records().enumerate() {
            let row = result?;
            total_rows += 1;
            if row_number == 0 && self.skip_header {
                debug!(cells = row.len(), "skipping header row");
                continue;
            }
            if row.iter().all(|cell| cell.trim().is_empty()) {
                debug!(row = row_number, "blank row");
                records.push(ParticipantRecord::default());
                continue;
            }
            records.push(self.layout.extract(&row));
        }

        if total_rows == 0 {
            return Err(RaffleError::EmptySource(self.path.display().to_string()));
        }

        debug!(rows = records.len(), source = %self.path.display(), "loaded participant rows");
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Records already in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<ParticipantRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<ParticipantRecord>) -> Self {
        Self { records }
    }
}

impl ParticipantSource for MemorySource {
    fn load(&mut self) -> Result<Vec<ParticipantRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}
