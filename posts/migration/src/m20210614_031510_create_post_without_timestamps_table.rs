use sea_orm_migration::prelude::*;
use sea_orm_migration::schema::*;
use sea_orm::{EnumIter, Iterable};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum PostWithoutTimestamps {
    Table,
    Id,
    Title,
    Content,
    Status,
}

#[derive(DeriveIden, EnumIter)]
pub enum PostStatusEnum {
    Published,
    Draft,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let statuses: Vec<String> = PostStatusEnum::iter()
            .map(|status| Iden::to_string(&status))
            .collect();

        manager
            .create_table(
                Table::create()
                    .table(PostWithoutTimestamps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PostWithoutTimestamps::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(string(PostWithoutTimestamps::Title))
                    .col(text(PostWithoutTimestamps::Content))
                    .col(
                        string(PostWithoutTimestamps::Status)
                            .check(Expr::col(PostWithoutTimestamps::Status).is_in(statuses)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(PostWithoutTimestamps::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
