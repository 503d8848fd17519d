//! Domain models for claims, leaderboards and member summaries.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A single successful claim.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    /// Counter value captured by the claim.
    pub amount: i64,
    pub claimed_at: DateTime<Utc>,
}

impl Claim {
    /// Converts an entity model to a claim domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Claim)` - The converted claim
    /// - `Err(AppError::Internal)` - A stored snowflake failed to parse
    pub fn from_entity(entity: entity::user_score::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            amount: entity.score,
            claimed_at: entity.attempt_date,
        })
    }
}

/// Result of a successful claim, returned to the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Amount taken from the counter.
    pub amount: i64,
    /// Member's total after this claim.
    pub total: i64,
    /// Claims used including this one.
    pub claims_used: u64,
    /// Quota that applied to this claim.
    pub quota: u64,
}

/// One member's line on the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user_id: u64,
    pub total: i64,
}

/// What a member sees when asking for their own score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub total: i64,
    /// 1-based rank: one more than the number of members with a strictly greater total.
    pub rank: u64,
    /// Number of members with at least one claim.
    pub player_count: u64,
    /// Amounts of the member's claims in the order they were made.
    pub claims: Vec<i64>,
    /// Quota that applies to the member right now.
    pub quota: u64,
}

impl UserSummary {
    /// Claim amounts laid out per quota slot, `None` for slots not used yet.
    pub fn slots(&self) -> Vec<Option<i64>> {
        (0..self.quota as usize)
            .map(|index| self.claims.get(index).copied())
            .collect()
    }
}
