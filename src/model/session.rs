//! Domain models for button sessions.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// Lifecycle state of a guild's button.
///
/// Transitions only move forward: `Waiting` → `Started` → `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GameState {
    Waiting,
    Started,
    Ended,
}

impl GameState {
    /// Derives the state a session should be in at `now` from its time window.
    ///
    /// Used on construction and recovery so that timers missed across a restart do not leave a
    /// session in a stale state.
    ///
    /// # Arguments
    /// - `now` - Current time
    /// - `start` - Time at which claims open
    /// - `end` - Time at which the event ends
    ///
    /// # Returns
    /// - `GameState` - `Ended` from `end` onward, `Started` from `start` onward, else `Waiting`
    pub fn at(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if now >= end {
            GameState::Ended
        } else if now >= start {
            GameState::Started
        } else {
            GameState::Waiting
        }
    }
}

/// Persisted button session for a single guild.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSession {
    /// Discord guild ID, one session per guild.
    pub guild_id: u64,
    /// Category the event channels live in, when the event was provisioned under one.
    pub category_id: Option<u64>,
    /// Channel holding the button message.
    pub button_channel_id: u64,
    /// Last known button message.
    pub message_id: u64,
    /// Custom emoji ID or a unicode emoji shown on the claim buttons.
    pub emoji: String,
    pub start_timestamp: DateTime<Utc>,
    pub end_timestamp: DateTime<Utc>,
    /// Shared counter: ticks since the last successful claim.
    pub seconds: i64,
}

impl ButtonSession {
    /// Converts an entity model to a button session domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(ButtonSession)` - The converted session
    /// - `Err(AppError::Internal)` - A stored snowflake failed to parse
    pub fn from_entity(entity: entity::button::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            category_id: entity.category_id.map(parse_u64_from_string).transpose()?,
            button_channel_id: parse_u64_from_string(entity.button_channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            emoji: entity.emoji,
            start_timestamp: entity.start_timestamp,
            end_timestamp: entity.end_timestamp,
            seconds: entity.seconds,
        })
    }

    /// Handle to the message currently displaying the button.
    pub fn render_handle(&self) -> RenderHandle {
        RenderHandle {
            channel_id: self.button_channel_id,
            message_id: self.message_id,
        }
    }
}

/// Parameters for creating a session, or re-pointing an existing one at a new message.
///
/// On conflict only the channel and message columns are updated; the time window, emoji and
/// counter of an existing session are left untouched.
#[derive(Debug, Clone)]
pub struct UpsertSessionParam {
    pub guild_id: u64,
    pub category_id: Option<u64>,
    pub button_channel_id: u64,
    pub message_id: u64,
    pub emoji: String,
    pub start_timestamp: DateTime<Utc>,
    pub end_timestamp: DateTime<Utc>,
}

/// Channel and message identity of the displayed button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHandle {
    pub channel_id: u64,
    pub message_id: u64,
}

/// Administrator input for initializing a guild's button.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Channel the button message is posted in.
    pub button_channel_id: u64,
    /// Category of the button channel, if any.
    pub category_id: Option<u64>,
    /// Custom emoji ID or unicode emoji; the default diamond is used when absent.
    pub emoji: Option<String>,
    pub start_timestamp: DateTime<Utc>,
    pub end_timestamp: DateTime<Utc>,
}
