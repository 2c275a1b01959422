//! # Mergington Activities
//!
//! In-memory extracurricular activity roster for Mergington High School,
//! served over HTTP.
//!
//! Students can list activities, sign up for one, and unregister. Each
//! activity carries a description, schedule, capacity, and an ordered list of
//! participant emails with no duplicates. State lives for the lifetime of the
//! process only.
//!
//! - [`roster`] — the activity store and its seed data
//! - [`server`] — axum routes over a shared [`Roster`]
//! - [`config`] — environment-driven settings for the `server` binary

pub mod config;
pub mod roster;
pub mod server;

pub use config::ServerConfig;
pub use roster::{Activity, Confirmation, Roster, RosterError};
pub use server::{app_router, AppState};

/// Crate version reported by `/health`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
