use super::*;

/// Tests that each increment adds exactly one to the counter.
///
/// Expected: Ok with counter at 3 after three increments
#[tokio::test]
async fn increments_by_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button::ButtonFactory::new(db)
        .guild_id("31")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    for _ in 0..3 {
        repo.increment_seconds(31).await?;
    }

    assert_eq!(repo.get_seconds(31).await?, Some(3));

    Ok(())
}

/// Tests that incrementing one guild leaves other guilds untouched.
///
/// Expected: Ok with only the targeted counter changed
#[tokio::test]
async fn only_touches_target_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button::ButtonFactory::new(db)
        .guild_id("31")
        .seconds(5)
        .build()
        .await?;
    factory::button::ButtonFactory::new(db)
        .guild_id("32")
        .seconds(5)
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    repo.increment_seconds(31).await?;

    assert_eq!(repo.get_seconds(31).await?, Some(6));
    assert_eq!(repo.get_seconds(32).await?, Some(5));

    Ok(())
}

/// Tests reading the counter of a guild without a session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn get_seconds_returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);

    assert_eq!(repo.get_seconds(31).await?, None);

    Ok(())
}
