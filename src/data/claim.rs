//! Claim data repository for database operations.
//!
//! This module provides the `ClaimRepository` for the append-only `user_score` table.
//! Totals and leaderboards are summed in SQL; leaderboard ties resolve by who claimed first,
//! using the lowest claim id of each member.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    error::AppError,
    model::claim::{Claim, LeaderboardEntry},
    util::parse::parse_u64_from_string,
};

/// Repository providing database operations for claims.
pub struct ClaimRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClaimRepository<'a> {
    /// Creates a new ClaimRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ClaimRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts the claims a member made in a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of claims
    /// - `Err(DbErr)` - Database error during count
    pub async fn count_by_user(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::UserScore::find()
            .filter(entity::user_score::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::user_score::Column::UserId.eq(user_id.to_string()))
            .count(self.db)
            .await
    }

    /// Gets a member's claims in a guild, oldest first.
    pub async fn get_by_user(&self, guild_id: u64, user_id: u64) -> Result<Vec<Claim>, AppError> {
        entity::prelude::UserScore::find()
            .filter(entity::user_score::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::user_score::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::user_score::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Claim::from_entity)
            .collect()
    }

    /// Gets the most recent claim of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(Claim))` - Latest claim by attempt date
    /// - `Ok(None)` - Nobody has claimed yet
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn latest(&self, guild_id: u64) -> Result<Option<Claim>, AppError> {
        entity::prelude::UserScore::find()
            .filter(entity::user_score::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::user_score::Column::AttemptDate)
            .order_by_desc(entity::user_score::Column::Id)
            .one(self.db)
            .await?
            .map(Claim::from_entity)
            .transpose()
    }

    /// Records a claim and resets the guild's counter to zero as one transaction.
    ///
    /// Both writes go through the transaction so either the claim exists and the counter is
    /// zero, or neither change is visible.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `user_id` - Discord user ID of the claimer
    /// - `amount` - Counter value being claimed
    ///
    /// # Returns
    /// - `Ok(Claim)` - The created claim
    /// - `Err(AppError)` - Database error; the transaction is rolled back
    pub async fn reset_and_record(
        &self,
        guild_id: u64,
        user_id: u64,
        amount: i64,
    ) -> Result<Claim, AppError> {
        let txn = self.db.begin().await?;

        let claim = entity::user_score::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            score: ActiveValue::Set(amount),
            attempt_date: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        entity::prelude::Button::update_many()
            .col_expr(entity::button::Column::Seconds, Expr::value(0i64))
            .filter(entity::button::Column::GuildId.eq(guild_id.to_string()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Claim::from_entity(claim)
    }

    /// Sums a member's claims in a guild, zero when they never claimed.
    pub async fn user_total(&self, guild_id: u64, user_id: u64) -> Result<i64, DbErr> {
        let total = entity::prelude::UserScore::find()
            .select_only()
            .column_as(entity::user_score::Column::Score.sum(), "total")
            .filter(entity::user_score::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::user_score::Column::UserId.eq(user_id.to_string()))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// Builds the leaderboard of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `limit` - Maximum number of entries, or `None` for every member
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - Members by descending total, ties by first claim
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn leaderboard(
        &self,
        guild_id: u64,
        limit: Option<usize>,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let mut query = entity::prelude::UserScore::find()
            .select_only()
            .column(entity::user_score::Column::UserId)
            .column_as(entity::user_score::Column::Score.sum(), "total")
            .filter(entity::user_score::Column::GuildId.eq(guild_id.to_string()))
            .group_by(entity::user_score::Column::UserId)
            .order_by_desc(entity::user_score::Column::Score.sum())
            .order_by_asc(entity::user_score::Column::Id.min());

        if let Some(limit) = limit {
            query = query.limit(limit as u64);
        }

        query
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?
            .into_iter()
            .map(|(user_id, total)| {
                Ok(LeaderboardEntry {
                    user_id: parse_u64_from_string(user_id)?,
                    total,
                })
            })
            .collect()
    }
}
