use super::*;

/// Tests applying signed reputation deltas.
///
/// Expected: Ok with reputation reflecting the accumulated deltas
#[tokio::test]
async fn applies_signed_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.adjust_reputation(user.id, 10).await?;
    repo.adjust_reputation(user.id, -2).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.reputation, 8);

    Ok(())
}

/// Tests that reputation can go negative.
///
/// Downvotes on a fresh account push below zero; there is no floor.
///
/// Expected: Ok with negative reputation stored
#[tokio::test]
async fn allows_negative_reputation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.adjust_reputation(user.id, -2).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.reputation, -2);

    Ok(())
}
