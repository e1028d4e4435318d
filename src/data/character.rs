use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

/// Rows per INSERT statement, keeps batches well below SQLite's bound parameter limit
const INSERT_CHUNK_SIZE: usize = 500;

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, power: i32) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(name),
            power: ActiveValue::Set(power),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Inserts many catalog characters, returning the number of rows inserted
    ///
    /// Names must be unique among themselves and against existing rows, a
    /// duplicate fails the whole statement.
    pub async fn create_many(&self, characters: Vec<(String, i32)>) -> Result<u64, DbErr> {
        let now = Utc::now().naive_utc();
        let mut inserted = 0;

        for chunk in characters.chunks(INSERT_CHUNK_SIZE) {
            let models = chunk.iter().map(|(name, power)| entity::character::ActiveModel {
                name: ActiveValue::Set(name.clone()),
                power: ActiveValue::Set(*power),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            });

            inserted += entity::prelude::Character::insert_many(models)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(inserted)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Character::find().count(self.db).await
    }

    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets the IDs of every catalog character in ascending order
    pub async fn get_all_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Character::find()
            .select_only()
            .column(entity::character::Column::Id)
            .order_by_asc(entity::character::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the catalog characters with the provided IDs, in no particular order
    pub async fn get_many_by_ids(
        &self,
        ids: &[i32],
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .filter(entity::character::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }
}
