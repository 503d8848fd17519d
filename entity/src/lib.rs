//! SeaORM entity models for the button event database.

pub mod prelude;

pub mod button;
pub mod user_score;
