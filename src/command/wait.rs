//! Deadline-bounded waits for a follow-up chat message.
//!
//! Host adapters publish every plain chat message to a [`MessageBus`]. A command
//! that needs an answer from its user subscribes with [`MessageBus::listen`]
//! *before* prompting, then waits with [`ReplyListener::wait_for`], which
//! resolves to either the first qualifying message or [`WaitOutcome::TimedOut`].

use std::time::Duration;

use tokio::{
    sync::broadcast::{self, error::RecvError},
    time::{timeout_at, Instant},
};

/// A plain chat message, as opposed to a command invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author_id: i64,
    pub channel_id: i64,
    pub content: String,
}

/// Result of waiting for a reply.
#[derive(Debug, PartialEq, Eq)]
pub enum WaitOutcome<T> {
    Reply(T),
    TimedOut,
}

/// Fan-out of incoming chat messages to pending waits.
#[derive(Clone)]
pub struct MessageBus {
    sender: broadcast::Sender<IncomingMessage>,
}

impl MessageBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);

        Self { sender }
    }

    /// Publishes a message, returning how many pending waits received it.
    pub fn publish(&self, message: IncomingMessage) -> usize {
        // Sending only fails when nobody is listening, which is the common case
        self.sender.send(message).unwrap_or(0)
    }

    /// Starts buffering messages written by `author_id` in `channel_id`.
    pub fn listen(&self, author_id: i64, channel_id: i64) -> ReplyListener {
        ReplyListener {
            receiver: self.sender.subscribe(),
            author_id,
            channel_id,
        }
    }
}

pub struct ReplyListener {
    receiver: broadcast::Receiver<IncomingMessage>,
    author_id: i64,
    channel_id: i64,
}

impl ReplyListener {
    /// Waits until `accept` returns `Some` for a message from the listened
    /// author and channel, or until `timeout` elapses.
    ///
    /// Messages from other users or channels, and messages `accept` rejects,
    /// are skipped without ending the wait. A closed bus ends the wait as
    /// [`WaitOutcome::TimedOut`] since no reply can arrive anymore.
    pub async fn wait_for<T, F>(mut self, timeout: Duration, mut accept: F) -> WaitOutcome<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        let author_id = self.author_id;
        let channel_id = self.channel_id;
        let receiver = &mut self.receiver;

        let wait = async move {
            loop {
                match receiver.recv().await {
                    Ok(message) => {
                        if message.author_id != author_id || message.channel_id != channel_id {
                            continue;
                        }

                        if let Some(value) = accept(&message.content) {
                            return Some(value);
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!(
                            "Reply listener for user {} lagged behind by {} messages",
                            author_id,
                            skipped
                        );
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        };

        // A deadline past what Instant can represent never expires
        let result = match Instant::now().checked_add(timeout) {
            Some(deadline) => timeout_at(deadline, wait).await,
            None => Ok(wait.await),
        };

        match result {
            Ok(Some(value)) => WaitOutcome::Reply(value),
            _ => WaitOutcome::TimedOut,
        }
    }
}
