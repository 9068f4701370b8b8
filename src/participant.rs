use std::collections::HashMap;

/// One row of the attendee export, as the loader hands it over
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParticipantRecord {
    pub id: String,
    pub name: String,
    pub entered_at: String,
}

impl ParticipantRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        entered_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entered_at: entered_at.into(),
        }
    }

    /// True when the row had nothing in any of the columns we read
    pub fn is_blank(&self) -> bool {
        self.id.trim().is_empty() && self.name.trim().is_empty() && self.entered_at.trim().is_empty()
    }
}

/// Eligible participants keyed by id, in the order each id first appeared
///
/// Inserting an id that is already present replaces its name but keeps
/// its position.
#[derive(Debug, Clone, Default)]
pub struct ParticipantSet {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl ParticipantSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous name when the id was
    /// already present.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) -> Option<String> {
        let id = id.into();
        let name = name.into();
        match self.index.get(&id) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, name)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, name));
                None
            }
        }
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.index.get(id).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }
}
