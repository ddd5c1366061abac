use entity::post_without_timestamps::{self, PostStatus};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// A post stored without creation or update timestamps.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Post {
    id: i64,
    title: String,
    content: String,
    status: PostStatus,
}

impl Post {
    pub fn new(id: i64, title: String, content: String, status: PostStatus) -> Self {
        Self {
            id,
            title,
            content,
            status,
        }
    }

    /// Returns the ID of the post.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the title of the post.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content of the post.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the publication status of the post.
    pub fn status(&self) -> PostStatus {
        self.status
    }
}

impl From<post_without_timestamps::Model> for Post {
    fn from(model: post_without_timestamps::Model) -> Self {
        Post::new(model.id, model.title, model.content, model.status)
    }
}

/// Error type for PostService operations.
#[derive(Debug, thiserror::Error)]
pub enum PostServiceError {
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// Represents a post not found error.
    #[error("Post with ID {0} not found")]
    PostNotFound(i64),
}

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl PostService<'_> {
    pub fn new(db: &DatabaseConnection) -> PostService<'_> {
        PostService { db }
    }

    /// Creates a new post in the database.
    ///
    /// # Arguments
    ///
    /// * `title` - The title of the post.
    /// * `content` - The body of the post.
    /// * `status` - Whether the post is published or a draft.
    ///
    /// # Returns
    ///
    /// A `Result` containing the created `Post` if successful, or an error otherwise.
    #[tracing::instrument(skip(self, content))]
    pub async fn create_post(
        &self,
        title: String,
        content: String,
        status: PostStatus,
    ) -> Result<Post, PostServiceError> {
        let active_model = post_without_timestamps::ActiveModel {
            title: ActiveValue::Set(title),
            content: ActiveValue::Set(content),
            status: ActiveValue::Set(status),
            ..Default::default()
        };
        let created_model = active_model.insert(self.db).await?;
        Ok(Post::from(created_model))
    }

    /// Retrieves a post by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_post_by_id(&self, id: i64) -> Result<Post, PostServiceError> {
        let model = post_without_timestamps::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(PostServiceError::PostNotFound(id))?;
        Ok(Post::from(model))
    }

    /// Retrieves all posts, ordered by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_posts(&self) -> Result<Vec<Post>, PostServiceError> {
        let posts = post_without_timestamps::Entity::find()
            .order_by_asc(post_without_timestamps::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Post::from)
            .collect();
        Ok(posts)
    }

    /// Retrieves all posts with the given status, ordered by ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_posts_by_status(
        &self,
        status: PostStatus,
    ) -> Result<Vec<Post>, PostServiceError> {
        let posts = post_without_timestamps::Entity::find()
            .filter(post_without_timestamps::Column::Status.eq(status))
            .order_by_asc(post_without_timestamps::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Post::from)
            .collect();
        Ok(posts)
    }

    /// Moves a post to a new status, e.g. publishing a draft.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `Post` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn update_post_status(
        &self,
        id: i64,
        status: PostStatus,
    ) -> Result<Post, PostServiceError> {
        let post_to_update = post_without_timestamps::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(PostServiceError::PostNotFound(id))?;

        let mut active_model: post_without_timestamps::ActiveModel = post_to_update.into();
        active_model.status = ActiveValue::Set(status);
        let updated_model = active_model.update(self.db).await?;
        Ok(Post::from(updated_model))
    }

    /// Deletes a post by its ID.
    ///
    /// # Returns
    ///
    /// A `Result` containing the deleted `Post` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn delete_post_by_id(&self, id: i64) -> Result<Post, PostServiceError> {
        let post_to_delete = post_without_timestamps::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(PostServiceError::PostNotFound(id))?;

        let post_copy = Post::from(post_to_delete);
        post_without_timestamps::Entity::delete_by_id(id)
            .exec(self.db)
            .await?;
        tracing::info!("Deleted post {}", id);
        Ok(post_copy)
    }
}
