//! Line-oriented host reading chat events from a text stream.
//!
//! Each input line is one event:
//!
//! ```text
//! <user_id> <channel_id> /<command> [args...]
//! <user_id> <channel_id> <plain message>
//! ```
//!
//! Replies are written one per line as `[#<channel>] <text>`, or
//! `[#<channel> @<user> only] <text>` for ephemeral replies.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::Mutex,
    task::JoinSet,
};
use tracing::{debug, error, warn};

use crate::{
    command::{
        handler::CommandHandler,
        reply::{IntoReply, Invocation, Member, Reply, Responder, Visibility},
        wait::{IncomingMessage, MessageBus},
        Command,
    },
    error::{command::CommandError, Error},
};

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum ConsoleEvent {
    Command {
        invocation: Invocation,
        command: Command,
    },
    /// A command line whose arguments could not be parsed
    Rejected {
        invocation: Invocation,
        error: CommandError,
    },
    Message(IncomingMessage),
    /// A line without leading user and channel IDs
    Malformed(String),
}

/// Renders a platform ID the way mentions are displayed.
pub fn display_name(id: i64) -> String {
    format!("<@{}>", id)
}

fn member(id: i64) -> Member {
    Member {
        id,
        display_name: display_name(id),
    }
}

/// Splits off the first whitespace separated token.
fn next_token(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], input[end..].trim_start())),
        None => Some((input, "")),
    }
}

/// Parses one input line, returning `None` for blank lines.
pub fn parse_line(line: &str) -> Option<ConsoleEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let malformed = || Some(ConsoleEvent::Malformed(line.to_string()));

    let Some((user, rest)) = next_token(line) else {
        return malformed();
    };
    let Some((channel, content)) = next_token(rest) else {
        return malformed();
    };
    let (Ok(user_id), Ok(channel_id)) = (user.parse::<i64>(), channel.parse::<i64>()) else {
        return malformed();
    };
    if content.is_empty() {
        return malformed();
    }

    let Some(command_line) = content.strip_prefix('/') else {
        return Some(ConsoleEvent::Message(IncomingMessage {
            author_id: user_id,
            channel_id,
            content: content.to_string(),
        }));
    };

    let invocation = Invocation {
        user: member(user_id),
        channel_id,
    };

    Some(match parse_command(command_line) {
        Ok(command) => ConsoleEvent::Command {
            invocation,
            command,
        },
        Err(error) => ConsoleEvent::Rejected { invocation, error },
    })
}

/// Parses the text after the leading slash into a [`Command`].
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let (name, args) = next_token(input).unwrap_or(("", ""));

    match name {
        "roll" => Ok(Command::Roll),
        "mychars" => Ok(Command::MyChars),
        "deletechars" => Ok(Command::DeleteChars),
        "battle" => {
            let Some((opponent, _)) = next_token(args) else {
                return Err(CommandError::MissingArgument {
                    command: "battle",
                    argument: "opponent",
                });
            };

            let id = opponent
                .strip_prefix("<@")
                .and_then(|id| id.strip_suffix('>'))
                .unwrap_or(opponent);
            let id = id.parse::<i64>().map_err(|_| CommandError::InvalidArgument {
                command: "battle",
                argument: "opponent",
                reason: format!("{:?} is not a user ID", opponent),
            })?;

            Ok(Command::Battle {
                opponent: member(id),
            })
        }
        "addchar" => {
            let mut words = args.split_whitespace().collect::<Vec<_>>();
            let Some(power) = words.pop() else {
                return Err(CommandError::MissingArgument {
                    command: "addchar",
                    argument: "name",
                });
            };
            if words.is_empty() {
                // A lone number is a power without a name
                let argument = match power.parse::<i64>() {
                    Ok(_) => "name",
                    Err(_) => "power",
                };

                return Err(CommandError::MissingArgument {
                    command: "addchar",
                    argument,
                });
            }

            let power = power
                .parse::<i64>()
                .map_err(|_| CommandError::InvalidArgument {
                    command: "addchar",
                    argument: "power",
                    reason: format!("{:?} is not a whole number", power),
                })?;

            Ok(Command::AddChar {
                name: words.join(" "),
                power,
            })
        }
        "sacrifice" => {
            let character_name = args.split_whitespace().collect::<Vec<_>>().join(" ");
            if character_name.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "sacrifice",
                    argument: "character_name",
                });
            }

            Ok(Command::Sacrifice { character_name })
        }
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Formats a reply as a single output line, newlines in the reply are kept.
pub fn format_reply(invocation: &Invocation, reply: &Reply) -> String {
    match reply.visibility {
        Visibility::Public => format!("[#{}] {}\n", invocation.channel_id, reply.content),
        Visibility::Ephemeral => format!(
            "[#{} @{} only] {}\n",
            invocation.channel_id, invocation.user.id, reply.content
        ),
    }
}

/// Writes replies to an output stream.
pub struct ConsoleResponder<W> {
    writer: Mutex<W>,
}

impl<W> ConsoleResponder<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> Responder for ConsoleResponder<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn respond(&self, invocation: &Invocation, reply: Reply) -> Result<(), Error> {
        let line = format_reply(invocation, &reply);

        let mut writer = self.writer.lock().await;
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;

        Ok(())
    }
}

pub struct ConsoleHost<W> {
    handler: Arc<CommandHandler>,
    messages: MessageBus,
    responder: Arc<ConsoleResponder<W>>,
}

impl<W> ConsoleHost<W>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    /// `messages` must be the bus the handler listens on.
    pub fn new(
        handler: CommandHandler,
        messages: MessageBus,
        responder: Arc<ConsoleResponder<W>>,
    ) -> Self {
        Self {
            handler: Arc::new(handler),
            messages,
            responder,
        }
    }

    /// Serves events from `input` until it ends, then waits for running commands.
    pub async fn run<R>(self, mut input: R) -> Result<(), Error>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut tasks = JoinSet::new();
        let mut line = String::new();

        loop {
            line.clear();
            if input.read_line(&mut line).await? == 0 {
                break;
            }

            match parse_line(&line) {
                None => {}
                Some(ConsoleEvent::Malformed(raw)) => {
                    warn!("Ignoring malformed input line: {:?}", raw);
                }
                Some(ConsoleEvent::Message(message)) => {
                    let delivered = self.messages.publish(message);
                    debug!("Delivered message to {} pending waits", delivered);
                }
                Some(ConsoleEvent::Rejected { invocation, error }) => {
                    self.responder
                        .respond(&invocation, error.into_reply())
                        .await?;
                }
                Some(ConsoleEvent::Command {
                    invocation,
                    command,
                }) => {
                    let handler = self.handler.clone();
                    let responder = self.responder.clone();
                    // Subscribe here, the next input line may already be the answer
                    let listener = handler.subscribe(&invocation, &command);

                    tasks.spawn(async move {
                        handler
                            .handle_subscribed(&invocation, command, listener, responder.as_ref())
                            .await
                    });
                }
            }

            // Reap finished commands so the set does not grow with input length
            while let Some(result) = tasks.try_join_next() {
                log_task_result(result);
            }
        }

        while let Some(result) = tasks.join_next().await {
            log_task_result(result);
        }

        Ok(())
    }
}

fn log_task_result(result: Result<Result<(), Error>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(err)) => error!("Failed to deliver reply: {}", err),
        Err(err) => error!("Command task failed: {}", err),
    }
}
