use rand::seq::IndexedRandom;
use sea_orm::DatabaseConnection;

use crate::{
    data::{user::UserRepository, user_character::UserCharacterRepository},
    error::Error,
    model::battle::{BattleOutcome, BattleResult},
};

pub struct BattleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BattleService<'a> {
    /// Creates a new instance of [`BattleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws one owned character per player and compares their power
    ///
    /// Read-only, every call draws again so repeated battles between the same players
    /// may pit different characters against each other.
    ///
    /// # Arguments
    /// - `challenger_id` - Platform ID of the user who started the battle
    /// - `opponent_id` - Platform ID of the challenged user
    ///
    /// # Returns
    /// - `Ok(BattleOutcome::MissingPlayer)` - Either player has no user record
    /// - `Ok(BattleOutcome::MissingCharacters)` - Either player owns no characters
    /// - `Ok(BattleOutcome::Fought)` - The drawn characters, see [`BattleResult::winner`]
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn battle(&self, challenger_id: i64, opponent_id: i64) -> Result<BattleOutcome, Error> {
        let user_repo = UserRepository::new(self.db);
        let user_character_repo = UserCharacterRepository::new(self.db);

        let challenger = user_repo.find_by_discord_id(challenger_id).await?;
        let opponent = user_repo.find_by_discord_id(opponent_id).await?;
        let (Some(challenger), Some(opponent)) = (challenger, opponent) else {
            return Ok(BattleOutcome::MissingPlayer);
        };

        let challenger_characters = user_character_repo
            .get_many_with_character_by_user_id(challenger.id)
            .await?;
        let opponent_characters = user_character_repo
            .get_many_with_character_by_user_id(opponent.id)
            .await?;

        let (challenger_pick, opponent_pick) = {
            let mut rng = rand::rng();
            (
                challenger_characters.choose(&mut rng).cloned(),
                opponent_characters.choose(&mut rng).cloned(),
            )
        };

        match (challenger_pick, opponent_pick) {
            (Some((_, challenger)), Some((_, opponent))) => {
                Ok(BattleOutcome::Fought(BattleResult {
                    challenger,
                    opponent,
                }))
            }
            _ => Ok(BattleOutcome::MissingCharacters),
        }
    }
}
