use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{
    config::Config,
    error::Error,
    model::catalog::GenerationOutcome,
    service::catalog::{words, CatalogService},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Generate the character catalog if the database has none yet
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<GenerationOutcome, Error> {
    let outcome = CatalogService::new(db)
        .generate(words::ADJECTIVES, words::NOUNS)
        .await?;

    match &outcome {
        GenerationOutcome::Generated { inserted } => {
            tracing::info!("Generated {} catalog characters", inserted)
        }
        GenerationOutcome::AlreadyPopulated { existing } => {
            tracing::info!("Catalog already holds {} characters", existing)
        }
    }

    Ok(outcome)
}
