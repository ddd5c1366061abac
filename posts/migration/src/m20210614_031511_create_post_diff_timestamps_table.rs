use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PostDiffTimestamps {
    Table,
    Id,
    Title,
    Content,
    CreatedDate,
    UpdatedDate,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostDiffTimestamps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostDiffTimestamps::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(PostDiffTimestamps::Title))
                    .col(text(PostDiffTimestamps::Content))
                    .col(
                        timestamp_with_time_zone(PostDiffTimestamps::CreatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PostDiffTimestamps::UpdatedDate)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PostDiffTimestamps::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
