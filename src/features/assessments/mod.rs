//! AI assessment feature.
//!
//! Runs the mock movement analysis over uploaded videos and stores the
//! outcome as an immutable assessment row. The analyze endpoint responds
//! with the assessment at the top level next to `success`; the read
//! endpoints use the standard envelope.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/analyze` | Analyze a video and create an assessment |
//! | GET | `/api/assessments` | List the caller's assessments (paginated) |
//! | GET | `/api/assessments/{id}` | Get one assessment |

pub mod dtos;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::AssessmentService;
