use std::{sync::Arc, time::Duration};

use mitchdae::{
    command::{handler::CommandHandler, wait::MessageBus},
    config::Config,
    host::console::{ConsoleHost, ConsoleResponder},
};
use mitchdae_test_utils::prelude::*;
use sea_orm::EntityTrait;

static ADMIN_ID: i64 = 7;

/// Serves `input` through the console host and returns everything it wrote.
async fn run_console(test: &TestSetup, input: &str) -> String {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        roll_timeout: Duration::from_millis(200),
        admin_ids: vec![ADMIN_ID],
    };
    let messages = MessageBus::new(16);
    let handler = CommandHandler::new(test.db.clone(), messages.clone(), &config);

    let responder = Arc::new(ConsoleResponder::new(Vec::new()));
    let host = ConsoleHost::new(handler, messages, responder.clone());
    host.run(input.as_bytes()).await.unwrap();

    let output = Arc::try_unwrap(responder).ok().unwrap().into_inner();

    String::from_utf8(output).unwrap()
}

/// Expect rejected input answered privately and malformed lines skipped
#[tokio::test]
async fn answers_rejected_commands() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;

    let output = run_console(&test, "1 5 /dance\nnot a command\n\n2 5 /sacrifice\n").await;

    assert!(output.contains("[#5 @1 only] Unknown command: /dance\n"));
    assert!(output.contains("[#5 @2 only] /sacrifice is missing the character_name argument\n"));
    assert_eq!(output.lines().count(), 2);

    Ok(())
}

/// Expect ephemeral command replies tagged with the invoking user
#[tokio::test]
async fn tags_ephemeral_replies() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;

    let output = run_console(&test, "7 5 /addchar Wizard Mitch 500\n").await;

    assert_eq!(
        output,
        "[#5 @7 only] ✅ Added character **Wizard Mitch** with power 500.\n"
    );

    Ok(())
}

/// Expect the host to wait for a running roll before shutting down
#[tokio::test]
async fn finishes_running_commands() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    test.catalog().insert_character("Wizard Mitch", 500).await?;

    let output = run_console(&test, "3 9 /roll\n").await;

    assert_eq!(
        output,
        "[#9] Your roll:\n1. Wizard Mitch (Power 500)\nType the number of the character you want to claim!\n[#9] You didn't pick in time!\n"
    );

    Ok(())
}

/// Expect a pick on the line right after /roll to claim the character
#[tokio::test]
async fn claims_pick_following_roll() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    test.catalog().insert_character("Wizard Mitch", 500).await?;

    let output = run_console(&test, "3 9 /roll\n3 9 1\n").await;

    assert!(output.ends_with("[#9] You claimed **Wizard Mitch** with Power 500!\n"));
    assert_eq!(
        entity::prelude::UserCharacter::find()
            .all(&test.db)
            .await?
            .len(),
        1
    );

    Ok(())
}
