//! Button fixtures for creating in-memory event models.

use chrono::{DateTime, Duration, TimeZone, Utc};
use entity::button;

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "987654321";

/// Default test button channel ID.
pub const DEFAULT_CHANNEL_ID: &str = "111111111";

/// Default test button message ID.
pub const DEFAULT_MESSAGE_ID: &str = "222222222";

/// Default emoji when no custom emoji is configured.
pub const DEFAULT_EMOJI: &str = "💎";

/// Fixed event start used by fixtures so assertions do not depend on the current time.
pub fn default_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates an event entity model with default values.
///
/// # Default Values
/// - guild_id: `"987654321"`
/// - button_channel_id: `"111111111"`
/// - message_id: `"222222222"`
/// - emoji: `"💎"`
/// - start_timestamp: 2026-03-01 18:00 UTC
/// - end_timestamp: 36 hours after start
/// - seconds: `0`
pub fn entity() -> button::Model {
    entity_builder().build()
}

/// Creates an event entity builder for customization.
pub fn entity_builder() -> ButtonEntityBuilder {
    let start = default_start();
    ButtonEntityBuilder {
        model: button::Model {
            guild_id: DEFAULT_GUILD_ID.to_string(),
            category_id: None,
            button_channel_id: DEFAULT_CHANNEL_ID.to_string(),
            message_id: DEFAULT_MESSAGE_ID.to_string(),
            discussion_channel_id: None,
            voice_channel_id: None,
            emoji: DEFAULT_EMOJI.to_string(),
            start_timestamp: start,
            end_timestamp: start + Duration::hours(36),
            seconds: 0,
        },
    }
}

/// Builder for in-memory event models.
pub struct ButtonEntityBuilder {
    model: button::Model,
}

impl ButtonEntityBuilder {
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.model.message_id = message_id.into();
        self
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.model.emoji = emoji.into();
        self
    }

    pub fn seconds(mut self, seconds: i64) -> Self {
        self.model.seconds = seconds;
        self
    }

    pub fn build(self) -> button::Model {
        self.model
    }
}
