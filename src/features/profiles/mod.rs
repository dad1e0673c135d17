//! Athlete profile feature.
//!
//! Profiles are keyed by the auth subject and created lazily on the first
//! save, so `GET /api/profile` returns 404 until the user has saved one.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/profile` | Get the caller's profile |
//! | PUT | `/api/profile` | Create or update the caller's profile |
//! | GET | `/api/profile/stats` | Upload/assessment/challenge counters |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ProfileService;
