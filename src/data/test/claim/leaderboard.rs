use super::*;

/// Tests that the leaderboard is ordered by descending total.
///
/// Expected: Ok with members ordered by summed score
#[tokio::test]
async fn orders_by_descending_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (button, _) = factory::helpers::create_button_with_claims(
        db,
        &[("10", 5), ("20", 30), ("30", 12), ("10", 20)],
    )
    .await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let repo = ClaimRepository::new(db);
    let board = repo.leaderboard(guild_id, None).await?;

    let ranking: Vec<(u64, i64)> = board.iter().map(|e| (e.user_id, e.total)).collect();
    assert_eq!(ranking, vec![(20, 30), (10, 25), (30, 12)]);

    Ok(())
}

/// Tests limiting the leaderboard to the top entries.
///
/// Expected: Ok with at most `limit` entries, highest first
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (button, _) = factory::helpers::create_button_with_claims(
        db,
        &[("10", 1), ("20", 2), ("30", 3), ("40", 4)],
    )
    .await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let repo = ClaimRepository::new(db);
    let board = repo.leaderboard(guild_id, Some(2)).await?;

    let users: Vec<u64> = board.iter().map(|e| e.user_id).collect();
    assert_eq!(users, vec![40, 30]);

    Ok(())
}

/// Tests that equal totals keep the order of each member's first claim.
///
/// Expected: Ok with tied members ordered by who claimed first, including under a limit
#[tokio::test]
async fn ties_keep_first_claim_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (button, _) = factory::helpers::create_button_with_claims(
        db,
        &[("30", 4), ("10", 7), ("20", 7), ("30", 3), ("40", 9)],
    )
    .await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let repo = ClaimRepository::new(db);

    let board = repo.leaderboard(guild_id, None).await?;
    let users: Vec<u64> = board.iter().map(|e| e.user_id).collect();
    assert_eq!(users, vec![40, 30, 10, 20]);

    let top = repo.leaderboard(guild_id, Some(3)).await?;
    let users: Vec<u64> = top.iter().map(|e| e.user_id).collect();
    assert_eq!(users, vec![40, 30, 10]);

    Ok(())
}

/// Tests the leaderboard of a guild nobody claimed in.
///
/// Expected: Ok with no entries
#[tokio::test]
async fn empty_guild_has_empty_leaderboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (button, _) = factory::helpers::create_button_with_claims(db, &[]).await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let board = ClaimRepository::new(db).leaderboard(guild_id, None).await?;
    assert!(board.is_empty());

    Ok(())
}
