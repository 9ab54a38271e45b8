use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000003_location::Location};

static IDX_FAVORITE_LOCATION_LOCATION_ID: &str = "idx-user_favorite_location-location_id";
static FK_FAVORITE_LOCATION_USER_ID: &str = "fk-user_favorite_location-user_id";
static FK_FAVORITE_LOCATION_LOCATION_ID: &str = "fk-user_favorite_location-location_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteLocation::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteLocation::UserId))
                    .col(integer(UserFavoriteLocation::LocationId))
                    .col(timestamp(UserFavoriteLocation::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserFavoriteLocation::UserId)
                            .col(UserFavoriteLocation::LocationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_LOCATION_USER_ID)
                            .from(UserFavoriteLocation::Table, UserFavoriteLocation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_LOCATION_LOCATION_ID)
                            .from(UserFavoriteLocation::Table, UserFavoriteLocation::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_LOCATION_LOCATION_ID)
                    .table(UserFavoriteLocation::Table)
                    .col(UserFavoriteLocation::LocationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_LOCATION_LOCATION_ID)
                    .table(UserFavoriteLocation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoriteLocation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoriteLocation {
    Table,
    UserId,
    LocationId,
    CreatedAt,
}
