use super::*;

/// Tests re-pointing a session at a new message after a resend.
///
/// Expected: Ok with new message ID stored
#[tokio::test]
async fn stores_new_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button::ButtonFactory::new(db)
        .guild_id("55")
        .message_id("100")
        .build()
        .await?;

    let repo = SessionRepository::new(db);
    repo.update_message_id(55, 200).await?;

    let session = repo.find_by_guild_id(55).await?.unwrap();
    assert_eq!(session.message_id, 200);

    Ok(())
}
