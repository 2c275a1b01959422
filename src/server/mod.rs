//! HTTP server for the activity roster.
//!
//! # Endpoints
//!
//! - `GET    /`                                   — Redirect to the landing page
//! - `GET    /health`                             — Liveness probe
//! - `GET    /activities`                         — Full roster keyed by name
//! - `POST   /activities/:name/signup?email=..`   — Enroll a student
//! - `DELETE /activities/:name/unregister?email=..` — Withdraw a student
//! - `GET    /static/*`                           — Landing page assets

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{app_router, AppState};
