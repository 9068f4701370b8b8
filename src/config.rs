use crate::error::{RaffleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of prizes handed out per draw
pub const DEFAULT_WINNERS: usize = 12;

/// The organizer runs the raffle and cannot win it
pub const DEFAULT_EXCLUDED_NAME: &str = "Andrew Crawford";

/// Column positions in the attendee export (zero based)
pub const DEFAULT_NAME_COLUMN: usize = 0;
pub const DEFAULT_ID_COLUMN: usize = 1;
pub const DEFAULT_ENTERED_AT_COLUMN: usize = 6;

/// Draw configuration
///
/// Every field has a default so a JSON config file only needs to name
/// what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawConfig {
    pub winners: usize,
    pub excluded_names: Vec<String>,
    pub name_column: usize,
    pub id_column: usize,
    pub entered_at_column: usize,
    pub skip_header: bool,
    pub delimiter: char,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            winners: DEFAULT_WINNERS,
            excluded_names: vec![DEFAULT_EXCLUDED_NAME.to_string()],
            name_column: DEFAULT_NAME_COLUMN,
            id_column: DEFAULT_ID_COLUMN,
            entered_at_column: DEFAULT_ENTERED_AT_COLUMN,
            skip_header: true,
            delimiter: ',',
        }
    }
}

impl DrawConfig {
    /// Load a config from a JSON file and validate it
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: DrawConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.winners == 0 {
            return Err(RaffleError::InvalidConfig(
                "winner count must be at least 1".to_string(),
            ));
        }
        if self.name_column == self.id_column {
            return Err(RaffleError::InvalidConfig(format!(
                "name and id share column {}",
                self.name_column
            )));
        }
        if !self.delimiter.is_ascii() || self.delimiter == '\n' || self.delimiter == '"' {
            return Err(RaffleError::InvalidConfig(format!(
                "unusable delimiter {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Delimiter as the single byte the csv reader wants
    pub fn delimiter_byte(&self) -> u8 {
        // validate() guarantees ASCII
        self.delimiter as u8
    }
}
