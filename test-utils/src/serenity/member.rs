//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity guild Member.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the member belongs to
/// - `user_id` - Discord user ID
/// - `joined_at` - RFC 3339 timestamp of when the member joined, if known
/// - `premium_since` - RFC 3339 timestamp of when the member started boosting, if boosting
///
/// # Returns
/// - `Member` - A valid Serenity Member struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    joined_at: Option<&str>,
    premium_since: Option<&str>,
) -> Member {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": format!("user{}", user_id),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false
        },
        "nick": null,
        "avatar": null,
        "roles": [],
        "joined_at": joined_at,
        "premium_since": premium_since,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false
    }))
    .expect("Failed to create test member")
}
