//! Shared per-guild counter.
//!
//! The counter lives in the `button` row so it survives restarts. Every tick adds one and a
//! successful claim swaps it for a claim record. Tick and claim take the same per-guild lock,
//! which makes read-check-reset of a claim atomic with respect to ticks and other claims.

use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::{
    data::{claim::ClaimRepository, session::SessionRepository},
    error::{claim::ClaimError, AppError},
    model::{
        claim::{Claim, ClaimOutcome, LeaderboardEntry, UserSummary},
        session::GameState,
    },
};

/// Claims allowed per member.
pub const BASE_CLAIM_QUOTA: u64 = 3;

/// Claims allowed per member boosting the guild.
pub const BOOSTER_CLAIM_QUOTA: u64 = 4;

/// A claim only succeeds when the counter is strictly above this value.
pub const MIN_CLAIMABLE_SECONDS: i64 = 2;

/// Quota for a member.
pub fn claim_quota(is_booster: bool) -> u64 {
    if is_booster {
        BOOSTER_CLAIM_QUOTA
    } else {
        BASE_CLAIM_QUOTA
    }
}

pub struct CounterEngine {
    db: DatabaseConnection,
    guild_id: u64,
    lock: Mutex<()>,
}

impl CounterEngine {
    pub fn new(db: DatabaseConnection, guild_id: u64) -> Self {
        Self {
            db,
            guild_id,
            lock: Mutex::new(()),
        }
    }

    /// Adds one to the counter.
    pub async fn tick(&self) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;

        SessionRepository::new(&self.db)
            .increment_seconds(self.guild_id)
            .await?;

        Ok(())
    }

    /// Current counter value.
    ///
    /// # Returns
    /// - `Ok(i64)` - Counter value
    /// - `Err(AppError::SessionNotFound)` - The session row is gone
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn seconds(&self) -> Result<i64, AppError> {
        SessionRepository::new(&self.db)
            .get_seconds(self.guild_id)
            .await?
            .ok_or(AppError::SessionNotFound(self.guild_id))
    }

    /// Attempts to take the counter for a member.
    ///
    /// Checks run in order: the session must be started, the member must have quota left, and
    /// the counter must be above the grace threshold. A rejected attempt changes nothing. On
    /// success the claim is recorded and the counter reset in a single transaction.
    ///
    /// # Arguments
    /// - `state` - Session state observed by the caller, held stable for the duration of the call
    /// - `user_id` - Discord user ID of the claimer
    /// - `is_booster` - Whether the member boosts the guild, raising their quota
    ///
    /// # Returns
    /// - `Ok(ClaimOutcome)` - Amount taken and the member's new total
    /// - `Err(AppError::Claim(NotActive))` - Session is not started
    /// - `Err(AppError::Claim(QuotaExceeded))` - Member has no claims left
    /// - `Err(AppError::Claim(TooFast))` - Counter is at or below the grace threshold
    /// - `Err(AppError::DbErr)` - Database error; nothing was recorded
    pub async fn claim(
        &self,
        state: GameState,
        user_id: u64,
        is_booster: bool,
    ) -> Result<ClaimOutcome, AppError> {
        if state != GameState::Started {
            return Err(ClaimError::NotActive.into());
        }

        let _guard = self.lock.lock().await;

        let claim_repo = ClaimRepository::new(&self.db);
        let claims_used = claim_repo.count_by_user(self.guild_id, user_id).await?;

        let quota = claim_quota(is_booster);
        if claims_used >= quota {
            return Err(ClaimError::QuotaExceeded { quota }.into());
        }

        let seconds = self.seconds().await?;
        if seconds <= MIN_CLAIMABLE_SECONDS {
            return Err(ClaimError::TooFast { seconds }.into());
        }

        let claim = claim_repo
            .reset_and_record(self.guild_id, user_id, seconds)
            .await?;
        let total = claim_repo.user_total(self.guild_id, user_id).await?;

        Ok(ClaimOutcome {
            amount: claim.amount,
            total,
            claims_used: claims_used + 1,
            quota,
        })
    }

    pub async fn leaderboard(&self, limit: Option<usize>) -> Result<Vec<LeaderboardEntry>, AppError> {
        ClaimRepository::new(&self.db)
            .leaderboard(self.guild_id, limit)
            .await
    }

    pub async fn latest_claim(&self) -> Result<Option<Claim>, AppError> {
        ClaimRepository::new(&self.db).latest(self.guild_id).await
    }

    /// Builds the summary a member sees when reading their score.
    ///
    /// # Returns
    /// - `Ok(Some(UserSummary))` - Member has a positive total
    /// - `Ok(None)` - Member has not taken any diamonds yet
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn user_summary(
        &self,
        user_id: u64,
        is_booster: bool,
    ) -> Result<Option<UserSummary>, AppError> {
        let claims = ClaimRepository::new(&self.db)
            .get_by_user(self.guild_id, user_id)
            .await?;
        let total: i64 = claims.iter().map(|c| c.amount).sum();

        if total == 0 {
            return Ok(None);
        }

        let board = self.leaderboard(None).await?;

        Ok(Some(UserSummary {
            total,
            rank: rank_of(&board, total),
            player_count: board.len() as u64,
            claims: claims.iter().map(|c| c.amount).collect(),
            quota: claim_quota(is_booster),
        }))
    }
}

/// 1-based rank of a total: one more than the number of members strictly ahead.
fn rank_of(board: &[LeaderboardEntry], total: i64) -> u64 {
    1 + board.iter().filter(|entry| entry.total > total).count() as u64
}
