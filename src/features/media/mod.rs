//! Media upload feature.
//!
//! Athletes upload training videos and images for AI analysis. Files are
//! stored in MinIO under a public-read prefix and their metadata lives in
//! `media_uploads`. Uploads are capped at 50MB and a whitelist of video and
//! image MIME types.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/upload` | Upload a video or image (multipart) |
//! | GET | `/api/media` | List the caller's media (paginated) |
//! | GET | `/api/media/{id}` | Get one media file |
//! | DELETE | `/api/media/{id}` | Delete media, its object and assessments |
//! | GET | `/api/media/{id}/assessments` | Assessments made on the media |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::MediaService;
