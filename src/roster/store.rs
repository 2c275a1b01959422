//! The roster store: activity lookups plus guarded enroll/withdraw.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::activity::{Activity, ActivityEntry};
use super::error::{RosterError, SeedError};
use super::seed::mergington_activities;

/// What a successful mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterChange {
    Enrolled,
    Withdrawn,
}

/// Confirmation of a successful enroll or withdraw.
///
/// `Display` renders the user-facing message, e.g.
/// `Signed up ada@mergington.edu for Chess Club`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub change: RosterChange,
    pub activity: String,
    pub participant: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.change {
            RosterChange::Enrolled => {
                write!(f, "Signed up {} for {}", self.participant, self.activity)
            }
            RosterChange::Withdrawn => {
                write!(f, "Unregistered {} from {}", self.participant, self.activity)
            }
        }
    }
}

/// Point-in-time copy of the roster, in seed order.
///
/// Serializes as a JSON object keyed by activity name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot(Vec<(String, Activity)>);

impl RosterSnapshot {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.0.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for RosterSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

/// In-memory activity roster.
///
/// The name set is fixed at construction; each activity has its own lock so
/// a check-then-mutate on one activity is atomic and does not block others.
/// Share it between handlers as `Arc<Roster>`.
#[derive(Debug)]
pub struct Roster {
    /// Activity names in seed order.
    order: Vec<String>,
    activities: HashMap<String, Mutex<Activity>>,
}

impl Roster {
    /// Build a roster from named entries, keeping their order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = ActivityEntry>,
    ) -> Result<Self, SeedError> {
        let mut order = Vec::new();
        let mut activities = HashMap::new();
        for entry in entries {
            if activities.contains_key(&entry.name) {
                return Err(SeedError::DuplicateActivity(entry.name));
            }
            order.push(entry.name.clone());
            activities.insert(entry.name, Mutex::new(entry.activity));
        }
        Ok(Self { order, activities })
    }

    /// Roster holding the built-in Mergington High School activities.
    pub fn seeded() -> Self {
        let entries = mergington_activities();
        let order = entries.iter().map(|e| e.name.clone()).collect();
        let activities = entries
            .into_iter()
            .map(|e| (e.name, Mutex::new(e.activity)))
            .collect();
        Self { order, activities }
    }

    /// Copy of every activity, in seed order. Never mutates.
    pub fn list_activities(&self) -> RosterSnapshot {
        RosterSnapshot(
            self.order
                .iter()
                .filter_map(|name| {
                    let activity = self.activities.get(name)?.lock().clone();
                    Some((name.clone(), activity))
                })
                .collect(),
        )
    }

    /// Copy of a single activity.
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|slot| slot.lock().clone())
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append `participant` to the activity's list.
    ///
    /// Capacity is not checked.
    pub fn enroll(&self, activity: &str, participant: &str) -> Result<Confirmation, RosterError> {
        let slot = self.slot(activity)?;
        let mut record = slot.lock();
        if !record.participants.insert(participant) {
            return Err(RosterError::AlreadyEnrolled {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        }
        log::debug!(
            "Enrolled {} in {} ({} spots left)",
            participant,
            activity,
            record.spots_left()
        );
        Ok(Confirmation {
            change: RosterChange::Enrolled,
            activity: activity.to_string(),
            participant: participant.to_string(),
        })
    }

    /// Remove `participant` from the activity's list.
    pub fn withdraw(
        &self,
        activity: &str,
        participant: &str,
    ) -> Result<Confirmation, RosterError> {
        let slot = self.slot(activity)?;
        let mut record = slot.lock();
        if !record.participants.remove(participant) {
            return Err(RosterError::NotEnrolled {
                activity: activity.to_string(),
                participant: participant.to_string(),
            });
        }
        log::debug!("Withdrew {} from {}", participant, activity);
        Ok(Confirmation {
            change: RosterChange::Withdrawn,
            activity: activity.to_string(),
            participant: participant.to_string(),
        })
    }

    fn slot(&self, activity: &str) -> Result<&Mutex<Activity>, RosterError> {
        self.activities
            .get(activity)
            .ok_or_else(|| RosterError::NotFound {
                activity: activity.to_string(),
            })
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}
