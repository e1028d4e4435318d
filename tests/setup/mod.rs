use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use mitchdae::{
    command::{
        handler::CommandHandler,
        reply::{Invocation, Member, Reply, Responder},
        wait::{IncomingMessage, MessageBus},
        Command,
    },
    config::Config,
    error::Error,
};
use mitchdae_test_utils::prelude::*;
use tokio::{sync::mpsc, task::JoinHandle};

pub static TEST_CHANNEL_ID: i64 = 1000;
static TEST_ROLL_TIMEOUT: Duration = Duration::from_secs(20);

/// Forwards every reply into a channel so tests can observe them in order.
pub struct RecordingResponder {
    sender: mpsc::UnboundedSender<Reply>,
}

#[async_trait]
impl Responder for RecordingResponder {
    async fn respond(&self, _invocation: &Invocation, reply: Reply) -> Result<(), Error> {
        self.sender
            .send(reply)
            .map_err(|_| Error::InternalError("reply receiver dropped".to_string()))
    }
}

/// A command handler wired to a migrated in-memory database.
pub struct TestBot {
    pub test: TestSetup,
    pub messages: MessageBus,
    pub handler: Arc<CommandHandler>,
}

/// A command running in the background, used for commands that wait for chat messages.
pub struct PendingCommand {
    pub replies: mpsc::UnboundedReceiver<Reply>,
    pub task: JoinHandle<Result<(), Error>>,
}

pub async fn test_bot() -> Result<TestBot, TestError> {
    test_bot_with(Vec::new(), TEST_ROLL_TIMEOUT).await
}

pub async fn test_bot_with(
    admin_ids: Vec<i64>,
    roll_timeout: Duration,
) -> Result<TestBot, TestError> {
    let test = TestSetup::new().await?;
    Migrator::up(&test.db, None).await?;

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        roll_timeout,
        admin_ids,
    };

    let messages = MessageBus::new(16);
    let handler = CommandHandler::new(test.db.clone(), messages.clone(), &config);

    Ok(TestBot {
        test,
        messages,
        handler: Arc::new(handler),
    })
}

pub fn invocation(user_id: i64) -> Invocation {
    Invocation {
        user: member(user_id),
        channel_id: TEST_CHANNEL_ID,
    }
}

pub fn member(user_id: i64) -> Member {
    Member {
        id: user_id,
        display_name: format!("<@{}>", user_id),
    }
}

impl TestBot {
    /// Runs a command to completion and returns every reply it sent.
    pub async fn run(&self, user_id: i64, command: Command) -> Vec<Reply> {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let responder = RecordingResponder { sender };

        self.handler
            .handle(&invocation(user_id), command, &responder)
            .await
            .unwrap();
        drop(responder);

        let mut replies = Vec::new();
        while let Some(reply) = receiver.recv().await {
            replies.push(reply);
        }

        replies
    }

    /// Runs a command to completion and returns its single reply.
    pub async fn run_once(&self, user_id: i64, command: Command) -> Reply {
        let mut replies = self.run(user_id, command).await;
        assert_eq!(replies.len(), 1, "expected one reply, got {:?}", replies);

        replies.remove(0)
    }

    /// Starts a command in the background, subscribed to chat messages right away.
    pub fn start(&self, user_id: i64, command: Command) -> PendingCommand {
        let (sender, replies) = mpsc::unbounded_channel();
        let handler = self.handler.clone();
        let invocation = invocation(user_id);
        let listener = handler.subscribe(&invocation, &command);

        let task = tokio::spawn(async move {
            let responder = RecordingResponder { sender };
            handler
                .handle_subscribed(&invocation, command, listener, &responder)
                .await
        });

        PendingCommand { replies, task }
    }

    /// Sends a plain chat message as `user_id` in the test channel.
    pub fn say(&self, user_id: i64, content: &str) {
        self.messages.publish(IncomingMessage {
            author_id: user_id,
            channel_id: TEST_CHANNEL_ID,
            content: content.to_string(),
        });
    }
}

impl PendingCommand {
    pub async fn next_reply(&mut self) -> Reply {
        self.replies.recv().await.unwrap()
    }

    /// Waits for the command to finish and returns its remaining replies.
    pub async fn finish(mut self) -> Vec<Reply> {
        self.task.await.unwrap().unwrap();

        let mut replies = Vec::new();
        while let Some(reply) = self.replies.recv().await {
            replies.push(reply);
        }

        replies
    }
}
