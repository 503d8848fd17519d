use super::*;

fn param(guild_id: u64, message_id: u64) -> UpsertSessionParam {
    let start = Utc::now();
    UpsertSessionParam {
        guild_id,
        category_id: Some(900),
        button_channel_id: 800,
        message_id,
        emoji: "💎".to_string(),
        start_timestamp: start,
        end_timestamp: start + Duration::hours(36),
    }
}

/// Tests creating a new session.
///
/// Verifies that a new session starts with the counter at zero.
///
/// Expected: Ok with new session created
#[tokio::test]
async fn creates_new_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let session = repo.upsert(param(1234, 5678)).await?;

    assert_eq!(session.guild_id, 1234);
    assert_eq!(session.category_id, Some(900));
    assert_eq!(session.message_id, 5678);
    assert_eq!(session.seconds, 0);

    let count = entity::prelude::Button::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests upserting a guild that already has a session.
///
/// Verifies that the message is re-pointed while the counter and time window are kept.
///
/// Expected: Ok with message updated and counter preserved
#[tokio::test]
async fn updates_message_but_keeps_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::button::ButtonFactory::new(db)
        .guild_id("1234")
        .seconds(17)
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    let session = repo.upsert(param(1234, 9999)).await?;

    assert_eq!(session.message_id, 9999);
    assert_eq!(session.button_channel_id, 800);
    assert_eq!(session.seconds, 17);
    assert_eq!(session.start_timestamp, existing.start_timestamp);
    assert_eq!(session.end_timestamp, existing.end_timestamp);

    let count = entity::prelude::Button::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
