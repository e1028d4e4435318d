use sea_orm::{DbErr, RuntimeErr};

use super::*;

/// Expect success when creating ownership for an existing user and character
#[tokio::test]
async fn creates_user_character() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let user_model = test.user().insert_user(1).await?;
    let character_model = test.catalog().insert_character("Wizard Mitch", 500).await?;

    let user_character_repo = UserCharacterRepository::new(&test.db);
    let result = user_character_repo
        .create(user_model.id, character_model.id)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Expect success when the same character is owned twice by the same user
#[tokio::test]
async fn allows_duplicate_ownership() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let (user_model, _, character_model) = test
        .user()
        .insert_user_with_character(1, "Wizard Mitch", 500)
        .await?;

    let user_character_repo = UserCharacterRepository::new(&test.db);
    let result = user_character_repo
        .create(user_model.id, character_model.id)
        .await;

    assert!(result.is_ok());
    let owned = user_character_repo
        .get_many_with_character_by_user_id(user_model.id)
        .await?;
    assert_eq!(owned.len(), 2);

    Ok(())
}

/// Expect foreign key error when creating ownership for a missing user
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let character_model = test.catalog().insert_character("Wizard Mitch", 500).await?;

    // Don't create a user first, this will cause a foreign key error
    let user_id = 1;
    let user_character_repo = UserCharacterRepository::new(&test.db);
    let result = user_character_repo.create(user_id, character_model.id).await;

    // Error code 787 indicates a foreign key constraint error
    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "787"))
            .unwrap_or(false)
    ));

    Ok(())
}

/// Expect foreign key error when creating ownership for a missing character
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let user_model = test.user().insert_user(1).await?;

    let character_id = 1;
    let user_character_repo = UserCharacterRepository::new(&test.db);
    let result = user_character_repo.create(user_model.id, character_id).await;

    assert!(matches!(
        result,
        Err(DbErr::Query(RuntimeErr::SqlxError(err))) if err
            .as_database_error()
            .and_then(|d| d.code().map(|c| c == "787"))
            .unwrap_or(false)
    ));

    Ok(())
}
