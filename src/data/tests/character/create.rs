use super::*;

/// Expect success when creating a catalog character
#[tokio::test]
async fn creates_character() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;

    let character_repo = CharacterRepository::new(&test.db);
    let result = character_repo.create("Wizard Mitch".to_string(), 500).await;

    assert!(result.is_ok());
    let created = result.unwrap();
    assert_eq!(created.name, "Wizard Mitch");
    assert_eq!(created.power, 500);

    Ok(())
}

/// Expect Error when a character with the same name already exists
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    test.catalog().insert_character("Wizard Mitch", 500).await?;

    let character_repo = CharacterRepository::new(&test.db);
    let result = character_repo.create("Wizard Mitch".to_string(), 10).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect find_by_name to match the exact stored name only
#[tokio::test]
async fn finds_by_exact_name() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let character_model = test.catalog().insert_character("Wizard Mitch", 500).await?;

    let character_repo = CharacterRepository::new(&test.db);
    let found = character_repo.find_by_name("Wizard Mitch").await?;
    let missing = character_repo.find_by_name("Wizard Kaden").await?;

    assert_eq!(found, Some(character_model));
    assert!(missing.is_none());

    Ok(())
}
