//! Database repository layer.
//!
//! Repositories hold a reference to the database connection and convert SeaORM entity models
//! into domain models before returning them. All queries against the `button` and
//! `user_score` tables go through these structs.

pub mod claim;
pub mod session;

#[cfg(test)]
mod test;
