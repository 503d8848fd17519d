use crate::{
    data::{claim::ClaimRepository, session::SessionRepository},
    error::AppError,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod count_by_user;
mod latest;
mod leaderboard;
mod reset_and_record;
