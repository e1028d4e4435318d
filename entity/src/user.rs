use sea_orm::entity::prelude::*;

/// A chat platform member known to the bot.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stable identifier assigned by the chat platform
    #[sea_orm(unique)]
    pub discord_id: i64,
    #[sea_orm(default_value = 0)]
    pub cash: i64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_character::Entity")]
    UserCharacter,
}

impl Related<super::user_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCharacter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
