use super::*;

/// Tests counting claims for a member.
///
/// Verifies that claims of other members and other guilds are not counted.
///
/// Expected: Ok with only the member's claims in the guild
#[tokio::test]
async fn counts_only_member_claims_in_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (button, _) =
        factory::helpers::create_button_with_claims(db, &[("10", 3), ("10", 4), ("20", 5)])
            .await?;
    let other = factory::button::create_button(db).await?;
    factory::user_score::create_user_score(db, &other.guild_id, "10", 9).await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let repo = ClaimRepository::new(db);

    assert_eq!(repo.count_by_user(guild_id, 10).await?, 2);
    assert_eq!(repo.count_by_user(guild_id, 20).await?, 1);
    assert_eq!(repo.count_by_user(guild_id, 30).await?, 0);

    Ok(())
}

/// Tests that a member's claims are returned oldest first and sum to their total.
///
/// Expected: Ok with claims in insertion order and matching total
#[tokio::test]
async fn user_claims_sum_to_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_button_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (button, _) =
        factory::helpers::create_button_with_claims(db, &[("10", 3), ("20", 8), ("10", 40)])
            .await?;

    let guild_id: u64 = button.guild_id.parse().unwrap();
    let repo = ClaimRepository::new(db);

    let claims = repo.get_by_user(guild_id, 10).await?;
    let amounts: Vec<i64> = claims.iter().map(|c| c.amount).collect();

    assert_eq!(amounts, vec![3, 40]);
    assert_eq!(repo.user_total(guild_id, 10).await?, 43);
    assert_eq!(repo.user_total(guild_id, 30).await?, 0);

    Ok(())
}
