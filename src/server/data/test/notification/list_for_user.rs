use super::*;

/// Tests that the feed only shows the recipient's notifications.
///
/// Expected: Ok with other users' notifications excluded
#[tokio::test]
async fn scopes_to_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::notification::create_notification(db, alice.id).await?;
    factory::notification::create_notification(db, alice.id).await?;
    factory::notification::create_notification(db, bob.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, totals) = repo.list_for_user(alice.id, 0, 10, false).await?;

    assert_eq!(totals.number_of_items, 2);
    assert!(notifications.iter().all(|n| n.user_id == alice.id));

    Ok(())
}

/// Tests the unread-only filter.
///
/// Expected: Ok with read notifications skipped
#[tokio::test]
async fn filters_unread_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    test_utils::factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;
    let unread = factory::notification::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let (notifications, totals) = repo.list_for_user(user.id, 0, 10, true).await?;

    assert_eq!(totals.number_of_items, 1);
    assert_eq!(notifications[0].id, unread.id);

    Ok(())
}

/// Tests the unread counter.
///
/// Expected: Ok with only unread notifications counted
#[tokio::test]
async fn counts_unread() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;
    test_utils::factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.unread_count(user.id).await?, 2);

    Ok(())
}
