//! Challenges feature.
//!
//! Admins author challenges; athletes join them and attach submission
//! media. A user joins a given challenge at most once, enforced by the
//! database and surfaced as a 409. Expired challenges stay visible to
//! admins but can no longer be joined.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/challenges` | Joinable challenges with the caller's joined flag |
//! | GET | `/api/challenges/me` | The caller's memberships |
//! | GET | `/api/challenges/{id}` | Challenge detail plus membership |
//! | POST | `/api/challenges/{id}/join` | Join (409 when repeated) |
//! | POST | `/api/challenges/{id}/submit` | Attach submission media |
//! | POST | `/api/admin/challenges` | Author a challenge (admin) |
//! | GET | `/api/admin/challenges` | All challenges incl. expired (admin) |
//! | DELETE | `/api/admin/challenges/{id}` | Delete a challenge (admin) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::{admin_routes, routes};
pub use services::ChallengeService;
