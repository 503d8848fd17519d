//! Button factory for creating test event rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test event rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::button::ButtonFactory;
///
/// let button = ButtonFactory::new(&db)
///     .guild_id("987654321")
///     .seconds(12)
///     .build()
///     .await?;
/// ```
pub struct ButtonFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    category_id: Option<String>,
    button_channel_id: String,
    message_id: String,
    emoji: String,
    start_timestamp: DateTime<Utc>,
    end_timestamp: DateTime<Utc>,
    seconds: i64,
}

impl<'a> ButtonFactory<'a> {
    /// Creates a new ButtonFactory with default values.
    ///
    /// Defaults:
    /// - guild_id / button_channel_id / message_id: unique numeric strings
    /// - emoji: `"💎"`
    /// - start_timestamp: 1 hour ago
    /// - end_timestamp: 1 hour from now
    /// - seconds: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();
        Self {
            db,
            guild_id: next_id().to_string(),
            category_id: None,
            button_channel_id: next_id().to_string(),
            message_id: next_id().to_string(),
            emoji: "💎".to_string(),
            start_timestamp: now - Duration::hours(1),
            end_timestamp: now + Duration::hours(1),
            seconds: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn category_id(mut self, category_id: Option<String>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn button_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.button_channel_id = channel_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Sets the window during which claims are accepted.
    pub fn window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_timestamp = start;
        self.end_timestamp = end;
        self
    }

    /// Sets the shared counter value.
    pub fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Builds and inserts the event row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::button::Model)` - Created event row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::button::Model, DbErr> {
        entity::button::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            category_id: ActiveValue::Set(self.category_id),
            button_channel_id: ActiveValue::Set(self.button_channel_id),
            message_id: ActiveValue::Set(self.message_id),
            discussion_channel_id: ActiveValue::Set(None),
            voice_channel_id: ActiveValue::Set(None),
            emoji: ActiveValue::Set(self.emoji),
            start_timestamp: ActiveValue::Set(self.start_timestamp),
            end_timestamp: ActiveValue::Set(self.end_timestamp),
            seconds: ActiveValue::Set(self.seconds),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event row with default values.
///
/// Shorthand for `ButtonFactory::new(db).build().await`.
pub async fn create_button(db: &DatabaseConnection) -> Result<entity::button::Model, DbErr> {
    ButtonFactory::new(db).build().await
}
