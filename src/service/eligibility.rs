//! Member checks applied before a claim reaches the session.

use chrono::{DateTime, Duration, Utc};
use serenity::all::Member;

/// Whether the member boosts the guild.
pub fn is_booster(member: &Member) -> bool {
    member.premium_since.is_some()
}

/// Whether the member joined the guild less than `min_age` before `now`.
///
/// Members with an unknown join date are treated as established.
///
/// # Arguments
/// - `member` - Guild member fetched from Discord
/// - `now` - Current time
/// - `min_age` - Minimum membership age required to play
pub fn joined_recently(member: &Member, now: DateTime<Utc>, min_age: Duration) -> bool {
    match member.joined_at {
        Some(joined_at) => joined_at.unix_timestamp() > (now - min_age).timestamp(),
        None => false,
    }
}
