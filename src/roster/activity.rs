//! Activity records and their participant lists.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a participant list would contain the same id twice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate participant: {0}")]
pub struct DuplicateParticipant(pub String);

/// Ordered participant ids with no duplicates.
///
/// Serializes as a plain JSON/YAML array. Deserializing an array that
/// repeats an id fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Participants(Vec<String>);

impl Participants {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether `id` is on the list.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|p| p == id)
    }

    /// Append `id` at the end. Returns `false` (and leaves the list untouched)
    /// if it is already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove `id`, keeping the order of everyone else. Returns `false` if it
    /// was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.0.iter().position(|p| p == id) {
            Some(index) => {
                self.0.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for Participants {
    type Error = DuplicateParticipant;

    fn try_from(ids: Vec<String>) -> Result<Self, Self::Error> {
        let mut list = Participants::new();
        for id in ids {
            if list.contains(&id) {
                return Err(DuplicateParticipant(id));
            }
            list.0.push(id);
        }
        Ok(list)
    }
}

impl From<Participants> for Vec<String> {
    fn from(list: Participants) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a Participants {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An extracurricular activity.
///
/// `max_participants` is informational: nothing rejects a signup once the
/// list reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Participants,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Participants::new(),
        }
    }

    /// Builder-style helper that seeds the participant list. Repeated ids are
    /// kept once.
    pub fn with_participants<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.participants.insert(id);
        }
        self
    }

    /// Open places left before `max_participants`, saturating at zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// A named activity, the unit of seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub name: String,
    #[serde(flatten)]
    pub activity: Activity,
}

impl ActivityEntry {
    pub fn new(name: impl Into<String>, activity: Activity) -> Self {
        Self {
            name: name.into(),
            activity,
        }
    }
}
