//! User score factory for creating test claim rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test claim rows.
///
/// The referenced event row must already exist.
pub struct UserScoreFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    score: i64,
    attempt_date: DateTime<Utc>,
}

impl<'a> UserScoreFactory<'a> {
    /// Creates a new UserScoreFactory.
    ///
    /// Defaults:
    /// - attempt_date: now
    pub fn new(
        db: &'a DatabaseConnection,
        guild_id: impl Into<String>,
        user_id: impl Into<String>,
        score: i64,
    ) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: user_id.into(),
            score,
            attempt_date: Utc::now(),
        }
    }

    pub fn attempt_date(mut self, attempt_date: DateTime<Utc>) -> Self {
        self.attempt_date = attempt_date;
        self
    }

    /// Builds and inserts the claim row into the database.
    pub async fn build(self) -> Result<entity::user_score::Model, DbErr> {
        entity::user_score::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            score: ActiveValue::Set(self.score),
            attempt_date: ActiveValue::Set(self.attempt_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a claim row with the current time as attempt date.
pub async fn create_user_score(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
    score: i64,
) -> Result<entity::user_score::Model, DbErr> {
    UserScoreFactory::new(db, guild_id, user_id, score)
        .build()
        .await
}
