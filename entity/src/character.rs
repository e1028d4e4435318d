use sea_orm::entity::prelude::*;

/// A catalog entry that can be rolled and claimed.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub power: i32,
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
