use entity::post_without_timestamps::PostStatus;
use entity::prelude::PostWithoutTimestamps;
use posts::post::{Post, PostService, PostServiceError};
use sea_orm::{ActiveEnum, ConnectionTrait, EntityTrait, Iterable};

mod common;

#[tokio::test]
async fn can_create_and_read_back_post() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let post_service = PostService::new(&db);

    let created = post_service
        .create_post("Hello".to_string(), "World".to_string(), PostStatus::Draft)
        .await?;
    let fetched = post_service.get_post_by_id(created.id()).await?;

    let expected = Post::new(
        created.id(), // The ID is generated, so we use the created post's ID
        "Hello".to_string(),
        "World".to_string(),
        PostStatus::Draft,
    );
    assert_eq!(fetched, expected);
    Ok(())
}

#[tokio::test]
async fn stored_row_carries_no_timestamps() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let post_service = PostService::new(&db);
    post_service
        .create_post("Hello".to_string(), "World".to_string(), PostStatus::Draft)
        .await?;

    let row = db
        .query_one(sea_orm::Statement::from_string(
            db.get_database_backend(),
            "SELECT * FROM post_without_timestamps",
        ))
        .await?
        .expect("row should exist");
    assert_eq!(row.try_get::<String>("", "title")?, "Hello");
    assert_eq!(row.try_get::<String>("", "content")?, "World");
    assert_eq!(row.try_get::<String>("", "status")?, "draft");
    assert!(row.try_get::<String>("", "created_at").is_err());
    assert!(row.try_get::<String>("", "updated_at").is_err());
    Ok(())
}

#[tokio::test]
async fn status_outside_domain_is_rejected() -> anyhow::Result<()> {
    let db = common::setup_db().await?;

    let result = db
        .execute_unprepared(
            "INSERT INTO post_without_timestamps (title, content, status) \
             VALUES ('Hello', 'World', 'archived')",
        )
        .await;

    assert!(result.is_err());
    let rows = PostWithoutTimestamps::find().all(&db).await?;
    assert!(rows.is_empty());
    Ok(())
}

#[tokio::test]
async fn archived_cannot_pass_through_entity() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let post_service = PostService::new(&db);

    let labels: Vec<&str> = PostStatus::iter().map(|status| status.as_str()).collect();
    assert_eq!(labels, ["published", "draft"]);
    assert!(PostStatus::try_from_value(&"archived".to_string()).is_err());

    // Smuggle a row past the CHECK constraint; the entity still refuses it.
    db.execute_unprepared("PRAGMA ignore_check_constraints = ON").await?;
    db.execute_unprepared(
        "INSERT INTO post_without_timestamps (id, title, content, status) \
         VALUES (9, 'Hello', 'World', 'archived')",
    )
    .await?;

    let result = post_service.get_post_by_id(9).await;
    assert!(matches!(result, Err(PostServiceError::Database(_))));
    Ok(())
}

#[tokio::test]
async fn both_statuses_are_accepted() -> anyhow::Result<()> {
    let db = common::setup_db().await?;

    for status in ["published", "draft"] {
        db.execute_unprepared(&format!(
            "INSERT INTO post_without_timestamps (title, content, status) \
             VALUES ('t', 'c', '{}')",
            status
        ))
        .await?;
    }

    let rows = PostWithoutTimestamps::find().all(&db).await?;
    assert_eq!(rows.len(), 2);
    Ok(())
}

#[tokio::test]
async fn can_publish_draft() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let post_service = PostService::new(&db);
    let draft = post_service
        .create_post("Hello".to_string(), "World".to_string(), PostStatus::Draft)
        .await?;

    let published = post_service
        .update_post_status(draft.id(), PostStatus::Published)
        .await?;

    assert_eq!(published.status(), PostStatus::Published);
    assert_eq!(published.title(), "Hello");
    assert_eq!(published.content(), "World");
    Ok(())
}

#[tokio::test]
async fn can_filter_posts_by_status() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let post_service = PostService::new(&db);
    post_service
        .create_post("One".to_string(), "1".to_string(), PostStatus::Published)
        .await?;
    post_service
        .create_post("Two".to_string(), "2".to_string(), PostStatus::Draft)
        .await?;
    post_service
        .create_post("Three".to_string(), "3".to_string(), PostStatus::Published)
        .await?;

    let published = post_service.get_posts_by_status(PostStatus::Published).await?;
    let titles: Vec<&str> = published.iter().map(Post::title).collect();
    assert_eq!(titles, ["One", "Three"]);
    assert_eq!(post_service.get_all_posts().await?.len(), 3);
    Ok(())
}

#[tokio::test]
async fn can_delete_post() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let post_service = PostService::new(&db);
    let post = post_service
        .create_post("Hello".to_string(), "World".to_string(), PostStatus::Draft)
        .await?;

    let deleted = post_service.delete_post_by_id(post.id()).await?;

    assert_eq!(deleted, post);
    assert!(post_service.get_all_posts().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_post_is_reported() -> anyhow::Result<()> {
    let db = common::setup_db().await?;
    let post_service = PostService::new(&db);

    let result = post_service.get_post_by_id(42).await;

    assert!(matches!(result, Err(PostServiceError::PostNotFound(42))));
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Post with ID 42 not found");
    }
    Ok(())
}
