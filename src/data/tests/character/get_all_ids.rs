use super::*;

/// Expect IDs of every character in ascending order
#[tokio::test]
async fn returns_ids_in_order() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let characters = test.catalog().insert_mock_characters(3).await?;

    let character_repo = CharacterRepository::new(&test.db);
    let ids = character_repo.get_all_ids().await?;

    let expected: Vec<i32> = characters.iter().map(|c| c.id).collect();
    assert_eq!(ids, expected);

    Ok(())
}

/// Expect an empty list for an empty catalog
#[tokio::test]
async fn returns_empty_for_empty_catalog() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;

    let character_repo = CharacterRepository::new(&test.db);
    let ids = character_repo.get_all_ids().await?;

    assert!(ids.is_empty());

    Ok(())
}

/// Expect only the requested characters to be fetched
#[tokio::test]
async fn fetches_requested_ids() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let characters = test.catalog().insert_mock_characters(5).await?;

    let character_repo = CharacterRepository::new(&test.db);
    let mut fetched = character_repo
        .get_many_by_ids(&[characters[1].id, characters[3].id])
        .await?;
    fetched.sort_by_key(|c| c.id);

    assert_eq!(fetched, vec![characters[1].clone(), characters[3].clone()]);

    Ok(())
}
