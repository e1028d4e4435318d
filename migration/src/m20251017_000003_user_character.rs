use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251017_000001_user::User, m20251017_000002_character::Character};

static IDX_USER_CHARACTER_USER_ID: &str = "idx_user_character_user_id";
static FK_USER_CHARACTER_USER_ID: &str = "fk_user_character_user_id";
static FK_USER_CHARACTER_CHARACTER_ID: &str = "fk_user_character_character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys to an existing table, so they are
        // declared as part of the table definition.
        manager
            .create_table(
                Table::create()
                    .table(UserCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(UserCharacter::Id))
                    .col(integer(UserCharacter::UserId))
                    .col(integer(UserCharacter::CharacterId))
                    .col(timestamp(UserCharacter::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_CHARACTER_USER_ID)
                            .from(UserCharacter::Table, UserCharacter::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_CHARACTER_CHARACTER_ID)
                            .from(UserCharacter::Table, UserCharacter::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_CHARACTER_USER_ID)
                    .table(UserCharacter::Table)
                    .col(UserCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_CHARACTER_USER_ID)
                    .table(UserCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserCharacter {
    #[sea_orm(iden = "user_characters")]
    Table,
    Id,
    UserId,
    CharacterId,
    CreatedAt,
}
