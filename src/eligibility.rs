use crate::config::DrawConfig;
use crate::participant::ParticipantRecord;

/// Outcome of checking one loader record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Accepted,
    /// Nothing populated in the row
    BlankRow,
    BlankName,
    /// Name matches an excluded name (the organizer)
    Excluded,
}

impl Eligibility {
    pub fn is_accepted(self) -> bool {
        self == Eligibility::Accepted
    }
}

/// Decides which rows may enter the draw
#[derive(Debug, Clone, Default)]
pub struct EligibilityFilter {
    excluded: Vec<String>,
}

impl EligibilityFilter {
    pub fn new<I, S>(excluded_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded = excluded_names
            .into_iter()
            .map(|name| normalize(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect();
        Self { excluded }
    }

    pub fn from_config(config: &DrawConfig) -> Self {
        Self::new(&config.excluded_names)
    }

    pub fn check(&self, record: &ParticipantRecord) -> Eligibility {
        if record.is_blank() {
            return Eligibility::BlankRow;
        }
        let name = normalize(&record.name);
        if name.is_empty() {
            return Eligibility::BlankName;
        }
        if self.excluded.iter().any(|excluded| *excluded == name) {
            return Eligibility::Excluded;
        }
        Eligibility::Accepted
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
