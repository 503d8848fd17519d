//! Claims and score queries.

use crate::{
    error::AppError,
    model::claim::{ClaimOutcome, UserSummary},
    service::display::leaderboard_artifact,
};

use super::GameSession;

impl GameSession {
    /// Attempts a claim for a member.
    ///
    /// The state read lock is held for the whole claim so the session cannot end between the
    /// state check and the counter reset. On success the claim is announced in the background.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the claimer
    /// - `is_booster` - Whether the member boosts the guild
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome)` - Amount taken and the member's new total
    /// - `Err(AppError::Claim)` - The attempt was rejected without changing anything
    /// - `Err(AppError::DbErr)` - Database error; nothing was recorded
    pub async fn claim(&self, user_id: u64, is_booster: bool) -> Result<ClaimOutcome, AppError> {
        let state = self.state.read().await;
        let outcome = self.counter.claim(*state, user_id, is_booster).await?;
        drop(state);

        tracing::info!(
            "User {} claimed {} in guild {} ({}/{})",
            user_id,
            outcome.amount,
            self.guild_id,
            outcome.claims_used,
            outcome.quota
        );

        let notifier = self.notifier.clone();
        let guild_id = self.guild_id;
        tokio::spawn(async move {
            notifier
                .announce_claim(guild_id, user_id, outcome.amount)
                .await;
        });

        Ok(outcome)
    }

    /// Summary of a member's score, or `None` if they have not taken anything yet.
    pub async fn user_summary(
        &self,
        user_id: u64,
        is_booster: bool,
    ) -> Result<Option<UserSummary>, AppError> {
        self.counter.user_summary(user_id, is_booster).await
    }

    /// Full leaderboard as text with members' display names.
    pub async fn leaderboard_artifact(&self) -> Result<String, AppError> {
        let entries = self.counter.leaderboard(None).await?;
        let user_ids: Vec<u64> = entries.iter().map(|entry| entry.user_id).collect();
        let names = self.renderer.display_names(self.guild_id, &user_ids).await;

        Ok(leaderboard_artifact(&entries, &names))
    }

    /// Adds one to the counter.
    pub async fn tick(&self) -> Result<(), AppError> {
        self.counter.tick().await
    }

    /// Current counter value.
    pub async fn seconds(&self) -> Result<i64, AppError> {
        self.counter.seconds().await
    }
}
