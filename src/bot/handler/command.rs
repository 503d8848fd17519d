//! Slash command definitions and handling.
//!
//! All three commands are restricted to administrators:
//! - `init` - Creates the guild's button in a channel for a time window
//! - `resend_button_message` - Replaces the button message with a fresh one
//! - `scoreboard` - Sends the current full leaderboard as a file

use chrono::{DateTime, Utc};
use serenity::all::{
    ChannelId, ChannelType, CommandDataOption, CommandInteraction, CommandOptionType, Context,
    CreateAttachment, CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Permissions,
};

use crate::{
    error::AppError,
    model::session::SessionConfig,
    service::{display::LEADERBOARD_FILE_NAME, manager::SessionManager},
    util::parse::parse_emoji,
};

pub const INIT_COMMAND: &str = "init";
pub const RESEND_COMMAND: &str = "resend_button_message";
pub const SCOREBOARD_COMMAND: &str = "scoreboard";

/// Slash commands registered on ready.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(INIT_COMMAND)
            .description("Initialize the event")
            .default_member_permissions(Permissions::ADMINISTRATOR)
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Channel to post the button in",
                )
                .channel_types(vec![ChannelType::Text])
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "start",
                    "Start of the event as a unix timestamp",
                )
                .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "end",
                    "End of the event as a unix timestamp",
                )
                .required(true),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "emoji",
                "The diamond emoji to use in the button message",
            )),
        CreateCommand::new(RESEND_COMMAND)
            .description("Resends the button message")
            .default_member_permissions(Permissions::ADMINISTRATOR),
        CreateCommand::new(SCOREBOARD_COMMAND)
            .description("Sends the current leaderboard")
            .default_member_permissions(Permissions::ADMINISTRATOR),
    ]
}

/// Handles a slash command interaction.
pub async fn handle_command(manager: &SessionManager, ctx: Context, command: CommandInteraction) {
    match command.data.name.as_str() {
        INIT_COMMAND => {
            let content = match init(manager, &ctx, &command).await {
                Ok(content) => content,
                Err(e) => e.user_message(),
            };
            reply(&ctx, &command, content).await;
        }
        RESEND_COMMAND => {
            let content = match resend(manager, &command).await {
                Ok(content) => content,
                Err(e) => e.user_message(),
            };
            reply(&ctx, &command, content).await;
        }
        SCOREBOARD_COMMAND => scoreboard(manager, &ctx, &command).await,
        other => tracing::debug!("Ignoring unknown command {}", other),
    }
}

async fn init(
    manager: &SessionManager,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<String, AppError> {
    let guild_id = guild_id(command)?;
    let options = InitOptions::from_options(&command.data.options)?;

    // the channel's category is kept for reference only
    let category_id = match options.channel_id.to_channel(&ctx.http).await {
        Ok(channel) => channel
            .guild()
            .and_then(|channel| channel.parent_id)
            .map(|id| id.get()),
        Err(e) => {
            tracing::warn!("Failed to fetch channel {}: {}", options.channel_id, e);
            None
        }
    };

    let session = manager
        .initialize(guild_id, options.into_config(category_id)?)
        .await?;

    Ok(format!(
        "The button is ready in <#{}>!",
        session.render_handle().await.channel_id
    ))
}

async fn resend(manager: &SessionManager, command: &CommandInteraction) -> Result<String, AppError> {
    let handle = manager.force_resend_display(guild_id(command)?).await?;

    Ok(format!("Resent button message in <#{}>", handle.channel_id))
}

/// Sends the leaderboard file. Deferred first since resolving names can take a while.
async fn scoreboard(manager: &SessionManager, ctx: &Context, command: &CommandInteraction) {
    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer scoreboard command: {}", e);
        return;
    }

    let artifact = match guild_id(command) {
        Ok(guild_id) => manager.leaderboard_artifact(guild_id).await,
        Err(e) => Err(e),
    };

    let response = match artifact {
        Ok(artifact) if artifact.is_empty() => EditInteractionResponse::new().content("No score yet"),
        Ok(artifact) => EditInteractionResponse::new()
            .content("Here is the current leaderboard:")
            .new_attachment(CreateAttachment::bytes(
                artifact.into_bytes(),
                LEADERBOARD_FILE_NAME,
            )),
        Err(e) => EditInteractionResponse::new().content(e.user_message()),
    };

    if let Err(e) = command.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to send scoreboard: {}", e);
    }
}

async fn reply(ctx: &Context, command: &CommandInteraction, content: String) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to reply to /{}: {}", command.data.name, e);
    }
}

fn guild_id(command: &CommandInteraction) -> Result<u64, AppError> {
    command
        .guild_id
        .map(|id| id.get())
        .ok_or_else(|| AppError::BadRequest("This command only works in a server.".to_string()))
}

/// Options of the `init` command.
#[derive(Debug, Clone, PartialEq)]
struct InitOptions {
    channel_id: ChannelId,
    start: i64,
    end: i64,
    emoji: Option<String>,
}

impl InitOptions {
    fn from_options(options: &[CommandDataOption]) -> Result<Self, AppError> {
        let mut channel_id = None;
        let mut start = None;
        let mut end = None;
        let mut emoji = None;

        for option in options {
            match option.name.as_str() {
                "channel" => channel_id = option.value.as_channel_id(),
                "start" => start = option.value.as_i64(),
                "end" => end = option.value.as_i64(),
                "emoji" => emoji = option.value.as_str().and_then(parse_emoji),
                _ => {}
            }
        }

        Ok(Self {
            channel_id: channel_id.ok_or_else(|| missing_option("channel"))?,
            start: start.ok_or_else(|| missing_option("start"))?,
            end: end.ok_or_else(|| missing_option("end"))?,
            emoji,
        })
    }

    fn into_config(self, category_id: Option<u64>) -> Result<SessionConfig, AppError> {
        Ok(SessionConfig {
            button_channel_id: self.channel_id.get(),
            category_id,
            emoji: self.emoji,
            start_timestamp: timestamp(self.start, "start")?,
            end_timestamp: timestamp(self.end, "end")?,
        })
    }
}

fn missing_option(name: &str) -> AppError {
    AppError::BadRequest(format!("No {} provided", name))
}

fn timestamp(seconds: i64, name: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {} timestamp: {}", name, seconds)))
}
