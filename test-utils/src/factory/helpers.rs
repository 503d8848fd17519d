//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a started event and the given claims for it.
///
/// Each `(user_id, score)` pair becomes one claim row, inserted in order so that
/// insertion-order tie breaking is predictable in tests.
///
/// # Arguments
/// - `db` - Database connection
/// - `claims` - `(user_id, score)` pairs to insert
///
/// # Returns
/// - `Ok((button, claims))` - The event row and the created claim rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_button_with_claims(
    db: &DatabaseConnection,
    claims: &[(&str, i64)],
) -> Result<(entity::button::Model, Vec<entity::user_score::Model>), DbErr> {
    let button = crate::factory::button::create_button(db).await?;

    let mut created = Vec::with_capacity(claims.len());
    for (user_id, score) in claims {
        created.push(
            crate::factory::user_score::create_user_score(db, &button.guild_id, *user_id, *score)
                .await?,
        );
    }

    Ok((button, created))
}
