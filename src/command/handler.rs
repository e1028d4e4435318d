use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing::debug;

use crate::{
    command::{
        reply::{IntoReply, Invocation, Member, Reply, Responder},
        wait::{MessageBus, ReplyListener, WaitOutcome},
        Command,
    },
    config::Config,
    error::Error,
    model::{
        battle::{BattleOutcome, Winner},
        catalog::AddCharacterOutcome,
        collection::SacrificeOutcome,
        roll::parse_choice,
    },
    service::{
        battle::BattleService, catalog::CatalogService, roll::RollService,
        user_character::UserCharacterService,
    },
    util::lock::UserLocks,
};

/// Runs commands against the database and answers through a [`Responder`].
pub struct CommandHandler {
    db: DatabaseConnection,
    messages: MessageBus,
    locks: UserLocks,
    roll_timeout: Duration,
    admin_ids: Vec<i64>,
}

impl CommandHandler {
    pub fn new(db: DatabaseConnection, messages: MessageBus, config: &Config) -> Self {
        Self {
            db,
            messages,
            locks: UserLocks::new(),
            roll_timeout: config.roll_timeout,
            admin_ids: config.admin_ids.clone(),
        }
    }

    /// Runs a command to completion.
    ///
    /// Failures are reported to the invoking user as a reply, an error is only
    /// returned when that reply itself cannot be delivered.
    pub async fn handle(
        &self,
        invocation: &Invocation,
        command: Command,
        responder: &dyn Responder,
    ) -> Result<(), Error> {
        let listener = self.subscribe(invocation, &command);

        self.handle_subscribed(invocation, command, listener, responder)
            .await
    }

    /// Starts buffering the invoking user's chat messages for commands that
    /// wait on a reply.
    ///
    /// Hosts that run commands on separate tasks call this before spawning, so
    /// messages read after the command line are never missed.
    pub fn subscribe(&self, invocation: &Invocation, command: &Command) -> Option<ReplyListener> {
        match command {
            Command::Roll => Some(
                self.messages
                    .listen(invocation.user.id, invocation.channel_id),
            ),
            _ => None,
        }
    }

    /// Runs a command with the listener returned by [`CommandHandler::subscribe`].
    pub async fn handle_subscribed(
        &self,
        invocation: &Invocation,
        command: Command,
        listener: Option<ReplyListener>,
        responder: &dyn Responder,
    ) -> Result<(), Error> {
        let name = command.name();
        debug!("User {} ran /{}", invocation.user.id, name);

        if let Err(err) = self.dispatch(invocation, command, listener, responder).await {
            debug!("/{} failed for user {}: {}", name, invocation.user.id, err);
            responder.respond(invocation, err.into_reply()).await?;
        }

        Ok(())
    }

    async fn dispatch(
        &self,
        invocation: &Invocation,
        command: Command,
        listener: Option<ReplyListener>,
        responder: &dyn Responder,
    ) -> Result<(), Error> {
        match command {
            Command::Roll => {
                let listener = listener.unwrap_or_else(|| {
                    self.messages
                        .listen(invocation.user.id, invocation.channel_id)
                });

                self.roll(invocation, listener, responder).await
            }
            Command::Battle { opponent } => {
                let reply = self.battle(&invocation.user, &opponent).await?;
                responder.respond(invocation, reply).await
            }
            Command::AddChar { name, power } => {
                let reply = self.add_character(&invocation.user, &name, power).await?;
                responder.respond(invocation, reply).await
            }
            Command::MyChars => {
                let reply = self.list_characters(&invocation.user).await?;
                responder.respond(invocation, reply).await
            }
            Command::DeleteChars => {
                let reply = self.delete_characters(&invocation.user).await?;
                responder.respond(invocation, reply).await
            }
            Command::Sacrifice { character_name } => {
                let reply = self.sacrifice(&invocation.user, &character_name).await?;
                responder.respond(invocation, reply).await
            }
        }
    }

    async fn roll(
        &self,
        invocation: &Invocation,
        listener: ReplyListener,
        responder: &dyn Responder,
    ) -> Result<(), Error> {
        let rolled = RollService::new(&self.db).roll().await?;
        if rolled.is_empty() {
            return responder
                .respond(
                    invocation,
                    Reply::public("No characters found in the database."),
                )
                .await;
        }

        let choices = rolled
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {} (Power {})", i + 1, c.name, c.power))
            .collect::<Vec<_>>()
            .join("\n");
        responder
            .respond(
                invocation,
                Reply::public(format!(
                    "Your roll:\n{}\nType the number of the character you want to claim!",
                    choices
                )),
            )
            .await?;

        let option_count = rolled.len();
        let choice = listener
            .wait_for(self.roll_timeout, |content| {
                parse_choice(content, option_count)
            })
            .await;

        let index = match choice {
            WaitOutcome::Reply(index) => index,
            WaitOutcome::TimedOut => {
                debug!("User {} did not pick a rolled character", invocation.user.id);

                return responder
                    .respond(invocation, Reply::public("You didn't pick in time!"))
                    .await;
            }
        };

        let Some(character) = rolled.into_iter().nth(index) else {
            return Err(Error::InternalError(format!(
                "Roll choice {} out of range for {} options",
                index, option_count
            )));
        };

        let claim = {
            let _guard = self.locks.lock(invocation.user.id).await;
            RollService::new(&self.db)
                .claim(invocation.user.id, character)
                .await?
        };

        responder
            .respond(
                invocation,
                Reply::public(format!(
                    "You claimed **{}** with Power {}!",
                    claim.character.name, claim.character.power
                )),
            )
            .await
    }

    async fn battle(&self, challenger: &Member, opponent: &Member) -> Result<Reply, Error> {
        let outcome = BattleService::new(&self.db)
            .battle(challenger.id, opponent.id)
            .await?;

        let result = match outcome {
            BattleOutcome::MissingPlayer => {
                return Ok(Reply::public("Both players need to have characters!"))
            }
            BattleOutcome::MissingCharacters => {
                return Ok(Reply::public("Both players need at least one character!"))
            }
            BattleOutcome::Fought(result) => result,
        };

        let verdict = match result.winner() {
            Winner::Challenger => format!("🏆 {} wins!", challenger.display_name),
            Winner::Opponent => format!("🏆 {} wins!", opponent.display_name),
            Winner::Tie => "It's a tie!".to_string(),
        };

        Ok(Reply::public(format!(
            "{}'s **{} ({})** vs {}'s **{} ({})**\n{}",
            challenger.display_name,
            result.challenger.name,
            result.challenger.power,
            opponent.display_name,
            result.opponent.name,
            result.opponent.power,
            verdict
        )))
    }

    async fn add_character(&self, user: &Member, name: &str, power: i64) -> Result<Reply, Error> {
        if !self.admin_ids.contains(&user.id) {
            debug!("User {} is not allowed to add characters", user.id);

            return Ok(Reply::ephemeral("You are not allowed to add characters."));
        }

        let outcome = CatalogService::new(&self.db)
            .add_character(name, power)
            .await?;

        let reply = match outcome {
            AddCharacterOutcome::Added(character) => {
                tracing::info!(
                    "User {} added character {:?} with power {}",
                    user.id,
                    character.name,
                    character.power
                );

                Reply::ephemeral(format!(
                    "✅ Added character **{}** with power {}.",
                    character.name, character.power
                ))
            }
            AddCharacterOutcome::AlreadyExists(character) => Reply::ephemeral(format!(
                "A character named **{}** already exists.",
                character.name
            )),
            AddCharacterOutcome::InvalidPower(_) => {
                Reply::ephemeral("Power must be between 0 and 999.")
            }
        };

        Ok(reply)
    }

    async fn list_characters(&self, user: &Member) -> Result<Reply, Error> {
        let characters = UserCharacterService::new(&self.db)
            .get_user_characters(user.id)
            .await?
            .unwrap_or_default();

        if characters.is_empty() {
            return Ok(Reply::ephemeral("You have no characters yet!"));
        }

        let lines = characters
            .iter()
            .map(|c| format!("**{}** (Power {})", c.name, c.power))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Reply::ephemeral(format!("Your characters:\n{}", lines)))
    }

    async fn delete_characters(&self, user: &Member) -> Result<Reply, Error> {
        let _guard = self.locks.lock(user.id).await;

        match UserCharacterService::new(&self.db)
            .delete_user_characters(user.id)
            .await?
        {
            None => Ok(Reply::ephemeral("You have no characters to delete.")),
            Some(deleted) => {
                debug!("Deleted {} characters of user {}", deleted, user.id);

                Ok(Reply::ephemeral("✅ All your characters have been deleted."))
            }
        }
    }

    async fn sacrifice(&self, user: &Member, character_name: &str) -> Result<Reply, Error> {
        let _guard = self.locks.lock(user.id).await;

        let outcome = UserCharacterService::new(&self.db)
            .sacrifice(user.id, character_name)
            .await?;

        let reply = match outcome {
            SacrificeOutcome::NoUser => Reply::public("You don't have any characters yet!"),
            SacrificeOutcome::NotOwned => Reply::public("You do not own that character."),
            SacrificeOutcome::Sacrificed { character, balance } => {
                debug!(
                    "User {} sacrificed {:?}, balance is now {}",
                    user.id, character.name, balance
                );

                Reply::public(format!(
                    "You sacrificed **{}** for 💰 **{} Cash**.",
                    character.name, character.power
                ))
            }
        };

        Ok(reply)
    }
}
