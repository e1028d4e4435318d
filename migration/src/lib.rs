pub use sea_orm_migration::prelude::*;

mod m20251017_000001_user;
mod m20251017_000002_character;
mod m20251017_000003_user_character;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_user::Migration),
            Box::new(m20251017_000002_character::Migration),
            Box::new(m20251017_000003_user_character::Migration),
        ]
    }
}
