pub use sea_orm_migration::prelude::*;

mod m20210614_031510_create_post_without_timestamps_table;
mod m20210614_031511_create_post_diff_timestamps_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210614_031510_create_post_without_timestamps_table::Migration),
            Box::new(m20210614_031511_create_post_diff_timestamps_table::Migration),
        ]
    }
}
