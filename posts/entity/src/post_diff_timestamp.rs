use crate::timestamps::{self, TimestampColumns, Timestamped};
use sea_orm::entity::prelude::*;

/// A post whose creation and last-update times live in `created_date` and
/// `updated_date` instead of the default timestamp columns.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_diff_timestamps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_date: DateTimeUtc,
    pub updated_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Timestamped for Entity {
    const TIMESTAMPS: TimestampColumns<Column> = TimestampColumns {
        created_at: Column::CreatedDate,
        updated_at: Column::UpdatedDate,
    };
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        timestamps::touch(&mut self, insert, chrono::Utc::now());
        Ok(self)
    }
}
