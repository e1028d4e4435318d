pub mod words;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::character::CharacterRepository,
    error::Error,
    model::catalog::{AddCharacterOutcome, GenerationOutcome, MAX_POWER, MIN_POWER},
};

/// Service for the catalog of claimable characters.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fills an empty catalog with every `"<adjective> <noun>"` combination.
    ///
    /// Each name gets a uniformly random power in `0..=999`. All rows are written in
    /// one transaction. When the catalog already holds characters nothing is written,
    /// which keeps the powers assigned on first start stable across restarts.
    ///
    /// # Arguments
    /// - `adjectives` - Ordered list of name prefixes
    /// - `nouns` - Ordered list of name suffixes
    ///
    /// # Returns
    /// - `Ok(GenerationOutcome::Generated)` - Catalog was empty and has been filled
    /// - `Ok(GenerationOutcome::AlreadyPopulated)` - Catalog already had characters
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn generate(
        &self,
        adjectives: &[&str],
        nouns: &[&str],
    ) -> Result<GenerationOutcome, Error> {
        let txn = self.db.begin().await?;
        let character_repo = CharacterRepository::new(&txn);

        let existing = character_repo.count().await?;
        if existing > 0 {
            return Ok(GenerationOutcome::AlreadyPopulated { existing });
        }

        let characters = generate_characters(adjectives, nouns, &mut rand::rng());
        let inserted = character_repo.create_many(characters).await?;

        txn.commit().await?;

        Ok(GenerationOutcome::Generated { inserted })
    }

    /// Adds a single character to the catalog.
    ///
    /// # Returns
    /// - `Ok(AddCharacterOutcome::Added)` - Character was created
    /// - `Ok(AddCharacterOutcome::AlreadyExists)` - A character with that name exists, nothing written
    /// - `Ok(AddCharacterOutcome::InvalidPower)` - Power is outside `0..=999`, nothing written
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_character(
        &self,
        name: &str,
        power: i64,
    ) -> Result<AddCharacterOutcome, Error> {
        let power = match i32::try_from(power) {
            Ok(power) if (MIN_POWER..=MAX_POWER).contains(&power) => power,
            _ => return Ok(AddCharacterOutcome::InvalidPower(power)),
        };

        let txn = self.db.begin().await?;
        let character_repo = CharacterRepository::new(&txn);

        if let Some(existing) = character_repo.find_by_name(name).await? {
            return Ok(AddCharacterOutcome::AlreadyExists(existing));
        }

        let character = character_repo.create(name.to_string(), power).await?;
        txn.commit().await?;

        Ok(AddCharacterOutcome::Added(character))
    }
}

/// Builds the cartesian product of the word lists with random powers.
///
/// Names repeated by the lists themselves are kept once, first occurrence wins.
pub fn generate_characters<R: Rng + ?Sized>(
    adjectives: &[&str],
    nouns: &[&str],
    rng: &mut R,
) -> Vec<(String, i32)> {
    let mut seen = HashSet::new();
    let mut characters = Vec::with_capacity(adjectives.len() * nouns.len());

    for adjective in adjectives {
        for noun in nouns {
            let name = format!("{} {}", adjective, noun);
            if seen.insert(name.clone()) {
                characters.push((name, rng.random_range(MIN_POWER..=MAX_POWER)));
            }
        }
    }

    characters
}
