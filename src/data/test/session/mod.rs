use crate::{
    data::session::SessionRepository, error::AppError, model::session::UpsertSessionParam,
};
use chrono::{Duration, Utc};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod get_all;
mod increment_seconds;
mod update_message_id;
mod upsert;
