//! Side-channel announcements of claims.
//!
//! Announcements are fire-and-forget: implementations swallow their own failures so a claim is
//! never rolled back because, for example, a voice channel was unavailable.

use serenity::async_trait;

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn announce_claim(&self, guild_id: u64, user_id: u64, amount: i64);
}

/// Announces claims in the log.
pub struct TracingNotifier;

#[async_trait]
impl NotificationSink for TracingNotifier {
    async fn announce_claim(&self, guild_id: u64, user_id: u64, amount: i64) {
        tracing::info!(
            guild_id,
            user_id,
            amount,
            "Button claimed"
        );
    }
}
