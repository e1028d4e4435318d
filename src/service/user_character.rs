use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{user::UserRepository, user_character::UserCharacterRepository},
    error::Error,
    model::collection::SacrificeOutcome,
};

/// Service for the characters a user has claimed.
pub struct UserCharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserCharacterService<'a> {
    /// Creates a new instance of [`UserCharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the characters owned by a user, ordered by name
    ///
    /// A character owned more than once appears once per ownership entry.
    ///
    /// # Returns
    /// - `Ok(Some(Vec))` - The user's characters, possibly empty
    /// - `Ok(None)` - The user has never claimed a character
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user_characters(
        &self,
        discord_id: i64,
    ) -> Result<Option<Vec<entity::character::Model>>, Error> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
        else {
            return Ok(None);
        };

        let characters = UserCharacterRepository::new(self.db)
            .get_many_with_character_by_user_id(user.id)
            .await?
            .into_iter()
            .map(|(_, character)| character)
            .collect();

        Ok(Some(characters))
    }

    /// Removes every ownership entry of a user
    ///
    /// The user record and cash balance are kept.
    ///
    /// # Returns
    /// - `Ok(Some(count))` - Number of ownership entries deleted
    /// - `Ok(None)` - The user has never claimed a character
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_user_characters(&self, discord_id: i64) -> Result<Option<u64>, Error> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_discord_id(discord_id)
            .await?
        else {
            return Ok(None);
        };

        let result = UserCharacterRepository::new(self.db)
            .delete_all_by_user_id(user.id)
            .await?;

        Ok(Some(result.rows_affected))
    }

    /// Trades one owned character for cash equal to its power
    ///
    /// The name is matched case-insensitively. If the user owns the character several
    /// times the oldest ownership entry is removed. Removing the entry and crediting
    /// the cash happen in one transaction.
    ///
    /// # Returns
    /// - `Ok(SacrificeOutcome::NoUser)` - The user has never claimed a character
    /// - `Ok(SacrificeOutcome::NotOwned)` - The user owns no character with that name
    /// - `Ok(SacrificeOutcome::Sacrificed)` - The sacrificed character and the new balance
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn sacrifice(
        &self,
        discord_id: i64,
        character_name: &str,
    ) -> Result<SacrificeOutcome, Error> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);
        let user_character_repo = UserCharacterRepository::new(&txn);

        let Some(user) = user_repo.find_by_discord_id(discord_id).await? else {
            return Ok(SacrificeOutcome::NoUser);
        };

        let wanted = character_name.trim().to_lowercase();
        let Some((ownership, character)) = user_character_repo
            .get_many_with_character_by_user_id(user.id)
            .await?
            .into_iter()
            .filter(|(_, character)| character.name.to_lowercase() == wanted)
            .min_by_key(|(ownership, _)| ownership.id)
        else {
            return Ok(SacrificeOutcome::NotOwned);
        };

        let deleted = user_character_repo.delete(ownership.id).await?;
        if deleted.rows_affected != 1 {
            return Err(Error::InternalError(format!(
                "Ownership entry ID {} vanished while sacrificing it for user {}",
                ownership.id, discord_id
            )));
        }

        let user = user_repo
            .credit_cash(discord_id, i64::from(character.power))
            .await?;

        txn.commit().await?;

        Ok(SacrificeOutcome::Sacrificed {
            character,
            balance: user.cash,
        })
    }
}
