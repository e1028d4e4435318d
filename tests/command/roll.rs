use std::time::Duration;

use super::*;

/// Extracts the character name from a `"{i}. {name} (Power {power})"` prompt line.
fn offered_name(prompt: &Reply, choice: usize) -> String {
    let prefix = format!("{}. ", choice);
    let line = prompt
        .content
        .lines()
        .find(|line| line.starts_with(&prefix))
        .unwrap();
    let end = line.rfind(" (Power ").unwrap();

    line[prefix.len()..end].to_string()
}

/// Expect a public notice when the catalog is empty
#[tokio::test]
async fn reports_empty_catalog() -> Result<(), TestError> {
    let bot = test_bot().await?;

    let reply = bot.run_once(1, Command::Roll).await;

    assert_eq!(reply, Reply::public("No characters found in the database."));
    assert_eq!(ownership_count(&bot.test).await?, 0);

    Ok(())
}

/// Expect the picked character to be claimed after unrelated chatter is ignored
#[tokio::test]
async fn claims_picked_character() -> Result<(), TestError> {
    let bot = test_bot().await?;
    bot.test.catalog().insert_mock_characters(5).await?;

    let mut roll = bot.start(1, Command::Roll);
    let prompt = roll.next_reply().await;

    assert_eq!(prompt.visibility, Visibility::Public);
    assert_eq!(
        prompt
            .content
            .lines()
            .filter(|line| line.contains(" (Power "))
            .count(),
        3
    );

    let picked = offered_name(&prompt, 2);
    bot.say(2, "2");
    bot.say(1, "I like the second one");
    bot.say(1, "4");
    bot.say(1, "2");

    let replies = roll.finish().await;
    let picked_power = picked.trim_start_matches("Mock Character ");

    assert_eq!(
        replies,
        vec![Reply::public(format!(
            "You claimed **{}** with Power {}!",
            picked, picked_power
        ))]
    );

    let owners = entity::prelude::UserCharacter::find()
        .find_also_related(entity::prelude::Character)
        .all(&bot.test.db)
        .await?;
    assert_eq!(owners.len(), 1);
    assert_eq!(owners[0].1.as_ref().map(|c| c.name.clone()), Some(picked));

    let user = entity::prelude::User::find_by_id(owners[0].0.user_id)
        .one(&bot.test.db)
        .await?
        .unwrap();
    assert_eq!(user.discord_id, 1);
    assert_eq!(user.cash, 0);

    Ok(())
}

/// Expect nothing to be written when no valid pick arrives in time
#[tokio::test]
async fn times_out_without_pick() -> Result<(), TestError> {
    let bot = test_bot_with(Vec::new(), Duration::from_millis(200)).await?;
    bot.test.catalog().insert_mock_characters(5).await?;

    let mut roll = bot.start(1, Command::Roll);
    roll.next_reply().await;

    bot.say(1, "0");
    bot.say(1, "4");

    let replies = roll.finish().await;

    assert_eq!(replies, vec![Reply::public("You didn't pick in time!")]);
    assert_eq!(ownership_count(&bot.test).await?, 0);
    assert!(entity::prelude::User::find()
        .all(&bot.test.db)
        .await?
        .is_empty());

    Ok(())
}

/// Expect a small catalog to offer fewer than three characters
#[tokio::test]
async fn offers_whole_small_catalog() -> Result<(), TestError> {
    let bot = test_bot_with(Vec::new(), Duration::from_millis(200)).await?;
    bot.test.catalog().insert_character("Wizard Mitch", 500).await?;

    let mut roll = bot.start(1, Command::Roll);
    let prompt = roll.next_reply().await;

    assert!(prompt.content.contains("1. Wizard Mitch (Power 500)"));
    assert!(!prompt.content.contains("2. "));

    roll.finish().await;

    Ok(())
}

/// Expect a pick sent before the prompt is delivered to still be claimed
#[tokio::test]
async fn claims_pick_sent_before_prompt() -> Result<(), TestError> {
    let bot = test_bot().await?;
    bot.test.catalog().insert_character("Wizard Mitch", 500).await?;

    let roll = bot.start(1, Command::Roll);
    bot.say(1, "1");

    let replies = roll.finish().await;

    assert_eq!(
        replies.last(),
        Some(&Reply::public("You claimed **Wizard Mitch** with Power 500!"))
    );
    assert_eq!(ownership_count(&bot.test).await?, 1);

    Ok(())
}
