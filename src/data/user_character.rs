use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct UserCharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCharacterRepository<'a, C> {
    /// Creates a new instance of [`UserCharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new ownership entry for a character claimed by a user
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `character_id` (`i32`): ID of the catalog character entry in the database
    ///
    /// # Returns
    /// - `Ok(Model)`: The created ownership entry
    /// - `Err(DbErr)`: Database error, including a foreign key violation when either
    ///   the user or the character does not exist
    pub async fn create(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::user_character::Model, DbErr> {
        let user_character = entity::user_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user_character.insert(self.db).await
    }

    /// Gets all ownership entries of a user together with their catalog character
    ///
    /// Entries are ordered by character name, then by ownership ID so duplicate
    /// ownership of one character is listed oldest first.
    pub async fn get_many_with_character_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::user_character::Model,
            entity::character::Model,
        )>,
        DbErr,
    > {
        let entries = entity::prelude::UserCharacter::find()
            .filter(entity::user_character::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Character)
            .order_by_asc(entity::character::Column::Name)
            .order_by_asc(entity::user_character::Column::Id)
            .all(self.db)
            .await?;

        entries
            .into_iter()
            .map(|(ownership, character)| {
                // Only reachable if the character foreign key is not enforced
                let character = character.ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Character ID {} not found for ownership entry ID {}",
                        ownership.character_id, ownership.id
                    ))
                })?;

                Ok((ownership, character))
            })
            .collect()
    }

    /// Deletes a single ownership entry
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserCharacter::delete_by_id(user_character_id)
            .exec(self.db)
            .await
    }

    /// Deletes every ownership entry of a user in one statement
    pub async fn delete_all_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserCharacter::delete_many()
            .filter(entity::user_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
