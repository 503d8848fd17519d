//! Ready event handler for bot initialization.
//!
//! The ready event fires after the bot connects to Discord's gateway, and again after a
//! reconnect. It registers the slash commands and resumes every stored session; resuming is
//! idempotent, so a second ready event leaves running sessions alone.

use serenity::all::{Command, Context, Ready};

use crate::{bot::handler::command, service::manager::SessionManager};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `manager` - Session manager to resume stored sessions into
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(manager: &SessionManager, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
    }

    match manager.resume_all().await {
        Ok(sessions) => tracing::info!("{} button sessions live", sessions.len()),
        Err(e) => tracing::error!("Failed to resume button sessions: {}", e),
    }
}
