use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with the provided starting cash
    pub async fn create(&self, discord_id: i64, cash: i64) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            discord_id: ActiveValue::Set(discord_id),
            cash: ActiveValue::Set(cash),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn find_by_discord_id(
        &self,
        discord_id: i64,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await
    }

    /// Gets the user for the provided platform ID, creating them with zero cash if absent
    pub async fn get_or_create(&self, discord_id: i64) -> Result<entity::user::Model, DbErr> {
        if let Some(user) = self.find_by_discord_id(discord_id).await? {
            return Ok(user);
        }

        self.create(discord_id, 0).await
    }

    /// Adds `amount` to the user's cash balance
    ///
    /// The increment is applied in SQL so it never works on a stale balance. A user
    /// that does not exist yet is created with `amount` as their balance.
    ///
    /// # Returns
    /// The user with their updated balance
    pub async fn credit_cash(
        &self,
        discord_id: i64,
        amount: i64,
    ) -> Result<entity::user::Model, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::Cash,
                Expr::col(entity::user::Column::Cash).add(amount),
            )
            .filter(entity::user::Column::DiscordId.eq(discord_id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return self.create(discord_id, amount).await;
        }

        self.find_by_discord_id(discord_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "User with discord ID {} not found after crediting cash",
                discord_id
            ))
        })
    }
}
