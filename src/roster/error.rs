//! Roster errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by roster mutations.
///
/// The `Display` text of each client-facing variant is the exact `detail`
/// string the HTTP layer returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// No activity with this name exists.
    #[error("Activity not found")]
    NotFound { activity: String },

    /// The participant is already on the activity's list.
    #[error("Student already signed up for this activity")]
    AlreadyEnrolled {
        activity: String,
        participant: String,
    },

    /// The participant is not on the activity's list.
    #[error("Student not registered for this activity")]
    NotEnrolled {
        activity: String,
        participant: String,
    },

    /// Unexpected internal failure. No current code path produces it.
    #[error("Internal roster error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Name of the activity the failed call targeted, if any.
    pub fn activity(&self) -> Option<&str> {
        match self {
            RosterError::NotFound { activity }
            | RosterError::AlreadyEnrolled { activity, .. }
            | RosterError::NotEnrolled { activity, .. } => Some(activity),
            RosterError::Internal(_) => None,
        }
    }
}

/// Errors that can occur while building a roster from seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("failed to read seed file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid YAML/JSON or does not match the entry shape.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Two seed entries share the same activity name.
    #[error("Duplicate activity in seed data: {0}")]
    DuplicateActivity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_http_detail() {
        let not_found = RosterError::NotFound {
            activity: "Fencing".into(),
        };
        assert_eq!(not_found.to_string(), "Activity not found");

        let dup = RosterError::AlreadyEnrolled {
            activity: "Chess Club".into(),
            participant: "a@mergington.edu".into(),
        };
        assert_eq!(
            dup.to_string(),
            "Student already signed up for this activity"
        );

        let missing = RosterError::NotEnrolled {
            activity: "Chess Club".into(),
            participant: "a@mergington.edu".into(),
        };
        assert_eq!(missing.to_string(), "Student not registered for this activity");
    }

    #[test]
    fn test_activity_accessor() {
        let err = RosterError::NotEnrolled {
            activity: "Drama Club".into(),
            participant: "x@mergington.edu".into(),
        };
        assert_eq!(err.activity(), Some("Drama Club"));
        assert_eq!(RosterError::Internal("boom".into()).activity(), None);
    }
}
