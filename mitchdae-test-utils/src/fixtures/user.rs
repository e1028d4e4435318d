use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(&self, discord_id: i64) -> Result<entity::user::Model, TestError> {
        self.insert_user_with_cash(discord_id, 0).await
    }

    pub async fn insert_user_with_cash(
        &self,
        discord_id: i64,
        cash: i64,
    ) -> Result<entity::user::Model, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                discord_id: ActiveValue::Set(discord_id),
                cash: ActiveValue::Set(cash),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_user_character_ownership(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::user_character::Model, TestError> {
        Ok(
            entity::prelude::UserCharacter::insert(entity::user_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a user owning a single newly created catalog character.
    pub async fn insert_user_with_character(
        &self,
        discord_id: i64,
        name: &str,
        power: i32,
    ) -> Result<
        (
            entity::user::Model,
            entity::user_character::Model,
            entity::character::Model,
        ),
        TestError,
    > {
        let character_model = self.setup.catalog().insert_character(name, power).await?;
        let user_model = self.insert_user(discord_id).await?;
        let user_character_model = self
            .insert_user_character_ownership(user_model.id, character_model.id)
            .await?;

        Ok((user_model, user_character_model, character_model))
    }
}
