//! Posts whose timestamps live in `created_date` / `updated_date`.
//!
//! The entity's save hook stamps those columns, so this service never
//! writes a timestamp itself.

use crate::schema;
use chrono::{DateTime, Utc};
use entity::post_diff_timestamp;
use entity::timestamps::MappingError;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

#[derive(Debug, PartialEq, Clone, Eq)]
pub struct StampedPost {
    id: i64,
    title: String,
    content: String,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl StampedPost {
    /// Returns the ID of the post.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// When the post was first persisted.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// When the post was last persisted.
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }
}

impl From<post_diff_timestamp::Model> for StampedPost {
    fn from(model: post_diff_timestamp::Model) -> Self {
        StampedPost {
            id: model.id,
            title: model.title,
            content: model.content,
            created: model.created_date,
            updated: model.updated_date,
        }
    }
}

/// Error type for StampedPostService operations.
#[derive(Debug, thiserror::Error)]
pub enum StampedPostServiceError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// Represents a post not found error.
    #[error("Post with ID {0} not found")]
    PostNotFound(i64),
    /// The live schema no longer matches the entity's timestamp columns.
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

pub struct StampedPostService<'a> {
    db: &'a DatabaseConnection,
}

impl StampedPostService<'_> {
    pub fn new(db: &DatabaseConnection) -> StampedPostService<'_> {
        StampedPostService { db }
    }

    /// Creates a new post; both timestamps are set to the time of the insert.
    #[tracing::instrument(skip(self, content))]
    pub async fn create_post(
        &self,
        title: String,
        content: String,
    ) -> Result<StampedPost, StampedPostServiceError> {
        let active_model = post_diff_timestamp::ActiveModel {
            title: ActiveValue::Set(title),
            content: ActiveValue::Set(content),
            ..Default::default()
        };
        match active_model.insert(self.db).await {
            Ok(created_model) => Ok(StampedPost::from(created_model)),
            Err(err) => Err(self.classify_error(err).await),
        }
    }

    /// Edits a post by its ID, refreshing its last-update time.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `StampedPost` if successful, or an error otherwise.
    #[tracing::instrument(skip(self, new_content))]
    pub async fn edit_post_by_id(
        &self,
        id: i64,
        new_title: String,
        new_content: String,
    ) -> Result<StampedPost, StampedPostServiceError> {
        let post_to_update = self.find_by_id(id).await?;

        let mut active_model: post_diff_timestamp::ActiveModel = post_to_update.into();
        active_model.title = ActiveValue::Set(new_title);
        active_model.content = ActiveValue::Set(new_content);
        match active_model.update(self.db).await {
            Ok(updated_model) => Ok(StampedPost::from(updated_model)),
            Err(err) => Err(self.classify_error(err).await),
        }
    }

    /// Retrieves a post by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_post_by_id(&self, id: i64) -> Result<StampedPost, StampedPostServiceError> {
        let model = self.find_by_id(id).await?;
        Ok(StampedPost::from(model))
    }

    async fn find_by_id(
        &self,
        id: i64,
    ) -> Result<post_diff_timestamp::Model, StampedPostServiceError> {
        match post_diff_timestamp::Entity::find_by_id(id).one(self.db).await {
            Ok(found) => found.ok_or(StampedPostServiceError::PostNotFound(id)),
            Err(err) => Err(self.classify_error(err).await),
        }
    }

    /// A failed read or write is reported as a mapping error only when the
    /// live schema is missing the renamed timestamp columns. If the schema
    /// cannot be inspected either, the original error is kept.
    async fn classify_error(&self, err: DbErr) -> StampedPostServiceError {
        match schema::missing_timestamp_columns::<post_diff_timestamp::Entity>(self.db).await {
            Ok(missing) if !missing.is_empty() => {
                let mapping = MappingError::for_entity::<post_diff_timestamp::Entity>(err);
                tracing::error!(
                    "Timestamp columns {:?} out of sync with schema: {}",
                    missing,
                    mapping
                );
                StampedPostServiceError::Mapping(mapping)
            }
            Ok(_) => StampedPostServiceError::Database(err),
            Err(inspect) => {
                tracing::warn!("Could not inspect schema after failure: {}", inspect);
                StampedPostServiceError::Database(err)
            }
        }
    }
}
