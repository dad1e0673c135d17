use sqlx::PgPool;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::media::dtos::get_extension_from_content_type;
use crate::features::media::models::{MediaType, MediaUpload};
use crate::modules::storage::MinIOClient;

/// Service for media upload operations
pub struct MediaService {
    pool: PgPool,
    minio_client: Arc<MinIOClient>,
}

impl MediaService {
    pub fn new(pool: PgPool, minio_client: Arc<MinIOClient>) -> Self {
        Self { pool, minio_client }
    }

    /// Upload a media file to storage and save its metadata.
    ///
    /// The generated UUID doubles as the row ID and the object key stem, so
    /// a row always points at exactly one stored object.
    pub async fn upload(
        &self,
        data: Vec<u8>,
        file_name: &str,
        content_type: &str,
        description: Option<String>,
        tags: Vec<String>,
        user_id: &str,
    ) -> Result<MediaUpload> {
        let file_size = data.len() as i64;
        let file_type = MediaType::from_content_type(content_type);

        let file_id = Uuid::new_v4();
        let extension = get_extension_from_content_type(content_type)
            .unwrap_or_else(|| file_name.rsplit('.').next().unwrap_or("bin"));

        let file_key = self.minio_client.media_key(user_id, file_id, extension);

        self.minio_client
            .upload(&file_key, data, content_type)
            .await?;

        debug!("Media uploaded to storage: {}", file_key);

        let file_url = self.minio_client.public_url(&file_key);

        let media = sqlx::query_as::<_, MediaUpload>(
            r#"
            INSERT INTO media_uploads (id, user_id, file_name, file_key, file_url, file_type, file_size, description, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, file_name, file_key, file_url, file_type, file_size,
                      description, tags, upload_date
            "#,
        )
        .bind(file_id)
        .bind(user_id)
        .bind(file_name)
        .bind(&file_key)
        .bind(&file_url)
        .bind(file_type)
        .bind(file_size)
        .bind(&description)
        .bind(&tags)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to save media metadata: {:?}", e);
            AppError::Database(e)
        })?;

        info!(
            "Media saved: id={}, key={}, type={}, size={}",
            media.id, media.file_key, media.file_type, media.file_size
        );

        Ok(media)
    }

    /// Get a media file owned by the user
    pub async fn get_by_id(&self, id: Uuid, user_id: &str) -> Result<MediaUpload> {
        let media = sqlx::query_as::<_, MediaUpload>(
            r#"
            SELECT id, user_id, file_name, file_key, file_url, file_type, file_size,
                   description, tags, upload_date
            FROM media_uploads
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get media by ID: {:?}", e);
            AppError::Database(e)
        })?;

        media.ok_or_else(|| AppError::NotFound("Media file not found".to_string()))
    }

    /// List the user's media, newest first
    pub async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<MediaUpload>, i64)> {
        let media = sqlx::query_as::<_, MediaUpload>(
            r#"
            SELECT id, user_id, file_name, file_key, file_url, file_type, file_size,
                   description, tags, upload_date
            FROM media_uploads
            WHERE user_id = $1
            ORDER BY upload_date DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list media: {:?}", e);
            AppError::Database(e)
        })?;

        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM media_uploads WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count media: {:?}", e);
                    AppError::Database(e)
                })?;

        Ok((media, total))
    }

    /// Delete a media file owned by the user.
    ///
    /// Removes the stored object first, then the row. Assessments on the
    /// media are removed by the FK cascade.
    pub async fn delete(&self, id: Uuid, user_id: &str) -> Result<()> {
        let media = self.get_by_id(id, user_id).await?;

        self.minio_client.delete(&media.file_key).await?;

        debug!("Media deleted from storage: {}", media.file_key);

        sqlx::query("DELETE FROM media_uploads WHERE id = $1")
            .bind(media.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete media row: {:?}", e);
                AppError::Database(e)
            })?;

        info!("Media deleted: id={}, key={}", media.id, media.file_key);

        Ok(())
    }
}
