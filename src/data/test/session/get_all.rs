use super::*;

/// Tests listing every stored session.
///
/// Expected: Ok with one session per guild
#[tokio::test]
async fn returns_every_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::button::create_button(db).await?;
    let second = factory::button::create_button(db).await?;

    let repo = SessionRepository::new(db);
    let sessions = repo.get_all().await?;

    assert_eq!(sessions.len(), 2);
    let mut guild_ids: Vec<String> = sessions.iter().map(|s| s.guild_id.to_string()).collect();
    guild_ids.sort();
    let mut expected = vec![first.guild_id, second.guild_id];
    expected.sort();
    assert_eq!(guild_ids, expected);

    Ok(())
}

/// Tests listing when no guild has a session.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SessionRepository::new(db);
    let sessions = repo.get_all().await?;

    assert!(sessions.is_empty());

    Ok(())
}
