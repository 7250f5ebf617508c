use super::*;

/// Tests deleting one notification from the feed.
///
/// Expected: Ok(true) and the row gone
#[tokio::test]
async fn deletes_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);

    assert!(repo.delete_for_user(notification.id, user.id).await?);
    assert!(repo
        .find_for_user(notification.id, user.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a recipient cannot delete someone else's notification.
///
/// Expected: Ok(false) and the row untouched
#[tokio::test]
async fn ignores_foreign_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id).await?;

    let repo = NotificationRepository::new(db);

    assert!(!repo.delete_for_user(notification.id, intruder.id).await?);
    assert!(repo
        .find_for_user(notification.id, owner.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests clearing the whole feed.
///
/// Expected: Ok with the affected count and an empty feed afterwards
#[tokio::test]
async fn deletes_all_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, other.id).await?;

    let repo = NotificationRepository::new(db);
    let affected = repo.delete_all_for_user(user.id).await?;

    assert_eq!(affected, 2);

    let (remaining, _) = repo.list_for_user(user.id, 0, 10, false).await?;
    assert!(remaining.is_empty());

    let (others, _) = repo.list_for_user(other.id, 0, 10, false).await?;
    assert_eq!(others.len(), 1);

    Ok(())
}
