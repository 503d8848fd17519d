use super::*;

/// Tests that recording a claim resets the counter in the same operation.
///
/// Expected: Ok with claim stored and counter at zero
#[tokio::test]
async fn records_claim_and_resets_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button::ButtonFactory::new(db)
        .guild_id("77")
        .seconds(12)
        .build()
        .await?;

    let repo = ClaimRepository::new(db);
    let claim = repo.reset_and_record(77, 42, 12).await?;

    assert_eq!(claim.guild_id, 77);
    assert_eq!(claim.user_id, 42);
    assert_eq!(claim.amount, 12);

    let seconds = SessionRepository::new(db).get_seconds(77).await?;
    assert_eq!(seconds, Some(0));
    assert_eq!(repo.count_by_user(77, 42).await?, 1);

    Ok(())
}

/// Tests that a failed insert rolls back the counter reset.
///
/// Without the UserScore table the insert fails inside the transaction, so the counter must
/// keep its value.
///
/// Expected: Err with counter unchanged
#[tokio::test]
async fn failed_insert_keeps_counter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Button)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::button::ButtonFactory::new(db)
        .guild_id("77")
        .seconds(12)
        .build()
        .await?;

    let repo = ClaimRepository::new(db);
    let result = repo.reset_and_record(77, 42, 12).await;

    assert!(result.is_err());
    let seconds = SessionRepository::new(db).get_seconds(77).await?;
    assert_eq!(seconds, Some(12));

    Ok(())
}
