use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_character(
        &self,
        name: &str,
        power: i32,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                power: ActiveValue::Set(power),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts `count` characters named `Mock Character {n}` with power `n`.
    pub async fn insert_mock_characters(
        &self,
        count: i32,
    ) -> Result<Vec<entity::character::Model>, TestError> {
        let mut characters = Vec::new();
        for n in 0..count {
            characters.push(
                self.insert_character(&format!("Mock Character {}", n), n)
                    .await?,
            );
        }

        Ok(characters)
    }
}
