use super::*;

/// Tests finding an existing session by guild ID.
///
/// Verifies that the stored string snowflakes are parsed into the domain model.
///
/// Expected: Ok(Some) with matching ids
#[tokio::test]
async fn finds_existing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let button = factory::button::ButtonFactory::new(db)
        .guild_id("424242")
        .button_channel_id("515151")
        .message_id("616161")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let session = repo.find_by_guild_id(424242).await?;

    assert!(session.is_some());
    let session = session.unwrap();
    assert_eq!(session.guild_id, 424242);
    assert_eq!(session.button_channel_id, 515151);
    assert_eq!(session.message_id, 616161);
    assert_eq!(session.emoji, button.emoji);

    Ok(())
}

/// Tests looking up a guild without a session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button::create_button(db).await?;

    let repo = SessionRepository::new(db);
    let session = repo.find_by_guild_id(1).await?;

    assert!(session.is_none());

    Ok(())
}

/// Tests that a corrupted stored id surfaces as an error instead of a bogus session.
///
/// Expected: Err(AppError::Internal)
#[tokio::test]
async fn fails_on_unparsable_stored_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button::ButtonFactory::new(db)
        .guild_id("777")
        .message_id("deleted")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let result = repo.find_by_guild_id(777).await;

    assert!(matches!(result, Err(AppError::Internal(_))));

    Ok(())
}
