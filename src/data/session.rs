//! Button session data repository for database operations.
//!
//! This module provides the `SessionRepository` for reading and writing the one `button` row
//! each guild owns. Besides plain lookups it exposes the storage-level counter operations used
//! by the counter engine: an additive increment and a read of the current value.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::{
    error::AppError,
    model::session::{ButtonSession, UpsertSessionParam},
};

/// Repository providing database operations for button sessions.
pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    /// Creates a new SessionRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SessionRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the session of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(ButtonSession))` - Session found
    /// - `Ok(None)` - The guild has no session
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<ButtonSession>, AppError> {
        let entity = entity::prelude::Button::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        entity.map(ButtonSession::from_entity).transpose()
    }

    /// Gets every stored session, used to resume sessions at startup.
    pub async fn get_all(&self) -> Result<Vec<ButtonSession>, AppError> {
        entity::prelude::Button::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(ButtonSession::from_entity)
            .collect()
    }

    /// Creates a session, or re-points an existing one at a new channel and message.
    ///
    /// New sessions start with the counter at zero. When a row already exists for the guild
    /// only the category, channel and message columns are overwritten.
    ///
    /// # Arguments
    /// - `param` - Session identity, display location and time window
    ///
    /// # Returns
    /// - `Ok(ButtonSession)` - The stored session after the upsert
    /// - `Err(AppError)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertSessionParam) -> Result<ButtonSession, AppError> {
        let entity = entity::prelude::Button::insert(entity::button::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            category_id: ActiveValue::Set(param.category_id.map(|id| id.to_string())),
            button_channel_id: ActiveValue::Set(param.button_channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            discussion_channel_id: ActiveValue::Set(None),
            voice_channel_id: ActiveValue::Set(None),
            emoji: ActiveValue::Set(param.emoji),
            start_timestamp: ActiveValue::Set(param.start_timestamp),
            end_timestamp: ActiveValue::Set(param.end_timestamp),
            seconds: ActiveValue::Set(0),
        })
        .on_conflict(
            OnConflict::column(entity::button::Column::GuildId)
                .update_columns([
                    entity::button::Column::CategoryId,
                    entity::button::Column::ButtonChannelId,
                    entity::button::Column::MessageId,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        ButtonSession::from_entity(entity)
    }

    /// Adds one to the counter of a guild.
    ///
    /// The increment is a single `UPDATE ... SET seconds = seconds + 1` so concurrent writers
    /// never lose an increment to a read-modify-write race.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(())` - Counter incremented, or no session exists for the guild
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_seconds(&self, guild_id: u64) -> Result<(), DbErr> {
        entity::prelude::Button::update_many()
            .col_expr(entity::button::Column::Seconds, Expr::cust("seconds + 1"))
            .filter(entity::button::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Reads the current counter of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(i64))` - Current counter value
    /// - `Ok(None)` - The guild has no session
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_seconds(&self, guild_id: u64) -> Result<Option<i64>, DbErr> {
        let entity = entity::prelude::Button::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(|button| button.seconds))
    }

    /// Points the session at a new button message after a resend.
    pub async fn update_message_id(&self, guild_id: u64, message_id: u64) -> Result<(), DbErr> {
        entity::prelude::Button::update_many()
            .col_expr(
                entity::button::Column::MessageId,
                Expr::value(message_id.to_string()),
            )
            .filter(entity::button::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
