use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_user::User, m20251101_000002_character::Character};

static IDX_FAVORITE_CHARACTER_CHARACTER_ID: &str = "idx-user_favorite_character-character_id";
static FK_FAVORITE_CHARACTER_USER_ID: &str = "fk-user_favorite_character-user_id";
static FK_FAVORITE_CHARACTER_CHARACTER_ID: &str = "fk-user_favorite_character-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteCharacter::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteCharacter::UserId))
                    .col(integer(UserFavoriteCharacter::CharacterId))
                    .col(timestamp(UserFavoriteCharacter::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserFavoriteCharacter::UserId)
                            .col(UserFavoriteCharacter::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_USER_ID)
                            .from(UserFavoriteCharacter::Table, UserFavoriteCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_CHARACTER_ID)
                            .from(UserFavoriteCharacter::Table, UserFavoriteCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(UserFavoriteCharacter::Table)
                    .col(UserFavoriteCharacter::CharacterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(UserFavoriteCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoriteCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoriteCharacter {
    Table,
    UserId,
    CharacterId,
    CreatedAt,
}
