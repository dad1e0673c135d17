mod media;

pub use media::{MediaType, MediaUpload};
