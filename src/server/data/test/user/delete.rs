use super::*;

/// Tests deleting an account.
///
/// Expected: Ok(1) and the row gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_missing_user_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert_eq!(repo.delete(9999).await?, 0);

    Ok(())
}
