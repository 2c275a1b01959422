//! Activity roster — the in-memory store behind the HTTP API.
//!
//! A [`Roster`] maps activity names to [`Activity`] records and applies two
//! guarded mutations:
//!
//! - [`Roster::enroll`] appends a participant unless they are already listed
//! - [`Roster::withdraw`] removes a participant if they are listed
//!
//! The set of activities is fixed once the roster is built from seed data.
//! Each record sits behind its own lock, so mutations on different
//! activities never contend.
//!
//! # Example
//!
//! ```rust
//! use mergington_activities::roster::{Roster, RosterError};
//!
//! let roster = Roster::seeded();
//! let done = roster.enroll("Chess Club", "ada@mergington.edu").unwrap();
//! assert_eq!(done.to_string(), "Signed up ada@mergington.edu for Chess Club");
//!
//! let again = roster.enroll("Chess Club", "ada@mergington.edu");
//! assert!(matches!(again, Err(RosterError::AlreadyEnrolled { .. })));
//! ```

pub mod activity;
pub mod error;
pub mod seed;
pub mod store;

// Re-exports
pub use activity::{Activity, ActivityEntry, DuplicateParticipant, Participants};
pub use error::{RosterError, SeedError};
pub use seed::{load_seed_file, mergington_activities, parse_seed};
pub use store::{Confirmation, Roster, RosterChange, RosterSnapshot};
