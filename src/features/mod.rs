pub mod assessments;
pub mod auth;
pub mod challenges;
pub mod dashboard;
pub mod media;
pub mod profiles;
