//! Discord gateway integration.
//!
//! This module connects the session manager to Discord. The event handler routes button
//! clicks and slash commands to the manager, and `DiscordRenderer` implements the display seam
//! on top of the Discord HTTP API.
//!
//! The bot runs in its own tokio task; a gateway disconnect does not stop running sessions,
//! whose loops only need the HTTP client.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive interactions and guild availability
//! - `GUILD_MEMBERS` - Resolve member display names for the leaderboard (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod renderer;
pub mod start;
