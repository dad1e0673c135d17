use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::media::models::{MediaType, MediaUpload};
use crate::shared::validation::TAG_REGEX;

/// Allowed MIME types for media uploads
pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "video/mp4",
    "video/mov",
    "video/avi",
    "image/jpeg",
    "image/png",
    "image/gif",
];

/// Maximum file size in bytes (50MB)
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

/// Maximum number of tags per upload
pub const MAX_TAGS: usize = 5;

/// Maximum length of a single tag
pub const MAX_TAG_LENGTH: usize = 30;

/// Check if a MIME type is allowed
pub fn is_mime_type_allowed(content_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&content_type)
}

/// Validate an incoming file's content type and size before it is stored
pub fn validate_file(content_type: &str, size: usize) -> Result<(), String> {
    if size > MAX_FILE_SIZE {
        return Err(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_FILE_SIZE,
            MAX_FILE_SIZE / 1024 / 1024
        ));
    }

    if !is_mime_type_allowed(content_type) {
        return Err(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_MIME_TYPES.join(", ")
        ));
    }

    Ok(())
}

/// Get file extension from content type
pub fn get_extension_from_content_type(content_type: &str) -> Option<&'static str> {
    match content_type {
        "video/mp4" => Some("mp4"),
        "video/mov" => Some("mov"),
        "video/avi" => Some("avi"),
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Parse the `tags` multipart field.
///
/// Clients send tags as a JSON array string, e.g. `["sprint","leg day"]`.
/// Caps the count at [`MAX_TAGS`] and rejects tags that are empty, too long
/// or contain characters outside the tag alphabet.
pub fn parse_tags(raw: &str) -> Result<Vec<String>, String> {
    let tags: Vec<String> =
        serde_json::from_str(raw).map_err(|_| "Tags must be a JSON array of strings".to_string())?;

    if tags.len() > MAX_TAGS {
        return Err(format!("A maximum of {} tags is allowed", MAX_TAGS));
    }

    for tag in &tags {
        if tag.len() > MAX_TAG_LENGTH || !TAG_REGEX.is_match(tag) {
            return Err(format!("Invalid tag: '{}'", tag));
        }
    }

    Ok(tags)
}

/// Upload request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadMediaDto {
    /// The video or image to upload
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    /// Optional description of the clip
    #[schema(example = "Sprint start practice")]
    pub description: Option<String>,
    /// Tags as a JSON array string, at most 5
    #[schema(example = r#"["sprint","starts"]"#)]
    pub tags: Option<String>,
}

/// Response DTO returned right after an upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaUploadedDto {
    pub id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_type: MediaType,
}

/// Full media metadata response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MediaResponseDto {
    pub id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub file_type: MediaType,
    pub file_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub upload_date: DateTime<Utc>,
}

impl From<MediaUpload> for MediaResponseDto {
    fn from(media: MediaUpload) -> Self {
        Self {
            id: media.id,
            file_name: media.file_name,
            file_url: media.file_url,
            file_type: media.file_type,
            file_size: media.file_size,
            description: media.description,
            tags: media.tags,
            upload_date: media.upload_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_whitelist() {
        assert!(is_mime_type_allowed("video/mp4"));
        assert!(is_mime_type_allowed("image/gif"));
        assert!(!is_mime_type_allowed("video/webm"));
        assert!(!is_mime_type_allowed("application/pdf"));
    }

    #[test]
    fn test_validate_file_rejects_oversized_payloads() {
        assert!(validate_file("video/mp4", MAX_FILE_SIZE).is_ok());
        let err = validate_file("video/mp4", MAX_FILE_SIZE + 1).unwrap_err();
        assert!(err.contains("too large"));
    }

    #[test]
    fn test_validate_file_rejects_disallowed_mime_types() {
        let err = validate_file("application/pdf", 1024).unwrap_err();
        assert!(err.contains("not allowed"));
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(get_extension_from_content_type("video/mp4"), Some("mp4"));
        assert_eq!(get_extension_from_content_type("image/jpeg"), Some("jpg"));
        assert_eq!(get_extension_from_content_type("text/plain"), None);
    }

    #[test]
    fn test_parse_tags_accepts_json_array() {
        let tags = parse_tags(r#"["sprint","leg day","u-17"]"#).unwrap();
        assert_eq!(tags, vec!["sprint", "leg day", "u-17"]);
    }

    #[test]
    fn test_parse_tags_rejects_non_array_payloads() {
        assert!(parse_tags("sprint").is_err());
        assert!(parse_tags(r#"{"tag":"sprint"}"#).is_err());
        assert!(parse_tags(r#"[1, 2]"#).is_err());
    }

    #[test]
    fn test_parse_tags_caps_count() {
        let err = parse_tags(r#"["a","b","c","d","e","f"]"#).unwrap_err();
        assert!(err.contains("maximum of 5"));
    }

    #[test]
    fn test_parse_tags_rejects_bad_tags() {
        assert!(parse_tags(r#"[""]"#).is_err());
        assert!(parse_tags(r#"["-sprint"]"#).is_err());
        assert!(parse_tags(r#"["sprint!"]"#).is_err());
        assert!(parse_tags(&format!(r#"["{}"]"#, "a".repeat(31))).is_err());
    }

    #[test]
    fn test_uploaded_dto_uses_camel_case() {
        let dto = MediaUploadedDto {
            id: Uuid::nil(),
            file_name: "clip.mp4".to_string(),
            file_url: "https://cdn.example.com/media/clip.mp4".to_string(),
            file_type: MediaType::Video,
        };
        let body = serde_json::to_value(&dto).unwrap();
        assert_eq!(body["fileName"], "clip.mp4");
        assert_eq!(body["fileType"], "video");
        assert!(body.get("file_name").is_none());
    }
}
