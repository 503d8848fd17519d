//! Error types and interaction reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is the
//! top-level error type that wraps domain-specific errors; `user_message` maps it to the
//! text shown to a Discord member in an ephemeral reply.

pub mod claim;
pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{claim::ClaimError, config::ConfigError, internal::InternalError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion. Claim rejections are expected outcomes and carry
/// their own user-facing text, while infrastructure failures are logged and replaced with a
/// generic message when surfaced to a member.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected internal state, such as a stored id that no longer parses.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// A claim attempt was rejected by the counter engine.
    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// No button session exists for the guild.
    ///
    /// # Fields
    /// - Discord guild ID the operation targeted
    #[error("No button session for guild {0}")]
    SessionNotFound(u64),

    /// Invalid request error.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request, shown to the member as-is
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the text to show a member whose interaction failed with this error.
    ///
    /// Claim rejections and bad requests are shown verbatim. Everything else is an
    /// infrastructure failure: it is logged here and replaced with a generic message to avoid
    /// leaking internal details into the channel.
    ///
    /// # Returns
    /// - `String` - Reply content for the ephemeral interaction response
    pub fn user_message(&self) -> String {
        match self {
            Self::Claim(err) => err.user_message(),
            Self::SessionNotFound(_) => "There is no button in this server.".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("Interaction failed: {}", err);
                "Something went wrong, please try again later.".to_string()
            }
        }
    }
}
