use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for an athlete profile.
///
/// The primary key is the auth subject, so a user has at most one row.
/// The row is created lazily on the first profile save.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub sport: Option<String>,
    pub position: Option<String>,
    pub age: Option<i32>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
