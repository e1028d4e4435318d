use rand::{seq::IndexedRandom, Rng};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        character::CharacterRepository, user::UserRepository,
        user_character::UserCharacterRepository,
    },
    error::Error,
    model::roll::{Claim, ROLL_SIZE},
};

pub struct RollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RollService<'a> {
    /// Creates a new instance of [`RollService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws up to three distinct catalog characters uniformly at random
    ///
    /// # Returns
    /// - `Ok(Vec)` - The drawn characters in draw order, empty if the catalog is empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn roll(&self) -> Result<Vec<entity::character::Model>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let ids = character_repo.get_all_ids().await?;
        let drawn = sample_ids(&ids, ROLL_SIZE, &mut rand::rng());
        if drawn.is_empty() {
            return Ok(Vec::new());
        }

        let mut characters = character_repo.get_many_by_ids(&drawn).await?;
        characters.sort_by_key(|c| drawn.iter().position(|id| *id == c.id));

        Ok(characters)
    }

    /// Gives a rolled character to a user
    ///
    /// Creates the user with zero cash if this is their first claim. The user and the
    /// ownership entry are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Claim)` - The user, the new ownership entry and the claimed character
    /// - `Err(Error::DbErr)` - Database operation failed, including a foreign key violation
    ///   if the character no longer exists
    pub async fn claim(
        &self,
        discord_id: i64,
        character: entity::character::Model,
    ) -> Result<Claim, Error> {
        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn).get_or_create(discord_id).await?;
        let ownership = UserCharacterRepository::new(&txn)
            .create(user.id, character.id)
            .await?;

        txn.commit().await?;

        Ok(Claim {
            user,
            ownership,
            character,
        })
    }
}

/// Picks up to `amount` distinct IDs uniformly at random
fn sample_ids<R: Rng + ?Sized>(ids: &[i32], amount: usize, rng: &mut R) -> Vec<i32> {
    ids.choose_multiple(rng, amount).copied().collect()
}
