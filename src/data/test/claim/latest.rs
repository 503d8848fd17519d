use super::*;

/// Tests fetching the most recent claim of a guild.
///
/// Expected: Ok(Some) with the claim that has the latest attempt date
#[tokio::test]
async fn returns_most_recent_claim() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let button = factory::button::create_button(db).await?;
    let now = Utc::now();
    factory::user_score::UserScoreFactory::new(db, &button.guild_id, "10", 5)
        .attempt_date(now - Duration::minutes(2))
        .build()
        .await?;
    factory::user_score::UserScoreFactory::new(db, &button.guild_id, "20", 9)
        .attempt_date(now)
        .build()
        .await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let repo = ClaimRepository::new(db);
    let latest = repo.latest(guild_id).await?;

    assert!(latest.is_some());
    let latest = latest.unwrap();
    assert_eq!(latest.user_id, 20);
    assert_eq!(latest.amount, 9);

    Ok(())
}

/// Tests fetching the latest claim before anyone has claimed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_claims() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let button = factory::button::create_button(db).await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let repo = ClaimRepository::new(db);

    assert!(repo.latest(guild_id).await?.is_none());

    Ok(())
}
