use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000004_episode::Episode};

static IDX_FAVORITE_EPISODE_EPISODE_ID: &str = "idx-user_favorite_episode-episode_id";
static FK_FAVORITE_EPISODE_USER_ID: &str = "fk-user_favorite_episode-user_id";
static FK_FAVORITE_EPISODE_EPISODE_ID: &str = "fk-user_favorite_episode-episode_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteEpisode::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteEpisode::UserId))
                    .col(integer(UserFavoriteEpisode::EpisodeId))
                    .col(timestamp(UserFavoriteEpisode::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserFavoriteEpisode::UserId)
                            .col(UserFavoriteEpisode::EpisodeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_EPISODE_USER_ID)
                            .from(UserFavoriteEpisode::Table, UserFavoriteEpisode::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_EPISODE_EPISODE_ID)
                            .from(UserFavoriteEpisode::Table, UserFavoriteEpisode::EpisodeId)
                            .to(Episode::Table, Episode::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_EPISODE_EPISODE_ID)
                    .table(UserFavoriteEpisode::Table)
                    .col(UserFavoriteEpisode::EpisodeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_EPISODE_EPISODE_ID)
                    .table(UserFavoriteEpisode::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoriteEpisode::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoriteEpisode {
    Table,
    UserId,
    EpisodeId,
    CreatedAt,
}
