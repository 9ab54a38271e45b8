pub use sea_orm_migration::prelude::*;

mod m20251101_000001_user;
mod m20251101_000002_character;
mod m20251101_000003_location;
mod m20251101_000004_episode;
mod m20251101_000005_user_favorite_character;
mod m20251101_000006_user_favorite_location;
mod m20251101_000007_user_favorite_episode;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_user::Migration),
            Box::new(m20251101_000002_character::Migration),
            Box::new(m20251101_000003_location::Migration),
            Box::new(m20251101_000004_episode::Migration),
            Box::new(m20251101_000005_user_favorite_character::Migration),
            Box::new(m20251101_000006_user_favorite_location::Migration),
            Box::new(m20251101_000007_user_favorite_episode::Migration),
        ]
    }
}
