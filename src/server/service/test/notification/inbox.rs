use super::*;

/// Tests listing notifications for one user.
///
/// Expected: Ok with only the caller's notifications, newest first
#[tokio::test]
async fn lists_only_own_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let alice = factory::user::create_user(db.connection()).await?;
    let bob = factory::user::create_user(db.connection()).await?;

    for _ in 0..3 {
        factory::notification::create_notification(db.connection(), alice.id).await?;
    }
    factory::notification::create_notification(db.connection(), bob.id).await?;

    let service = NotificationService::new(&db);
    let page = service
        .list_notifications(ListNotificationsParams {
            user_id: alice.id,
            page: 1,
            per_page: 10,
            unread_only: false,
        })
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.notifications.len(), 3);
    assert!(page.notifications.iter().all(|n| n.user_id == alice.id));

    Ok(())
}

/// Tests the unread filter on the notification list.
///
/// Expected: Ok with read notifications excluded
#[tokio::test]
async fn unread_filter_excludes_read() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;
    let unread = factory::notification::create_notification(db.connection(), user.id).await?;
    factory::notification::NotificationFactory::new(db.connection(), user.id)
        .is_read(true)
        .build()
        .await?;

    let service = NotificationService::new(&db);
    let page = service
        .list_notifications(ListNotificationsParams {
            user_id: user.id,
            page: 1,
            per_page: 10,
            unread_only: true,
        })
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.notifications[0].id, unread.id);
    assert_eq!(service.unread_count(user.id).await?, 1);

    Ok(())
}

/// Tests that lookups and deletes are scoped to the recipient.
///
/// Expected: Err(NotFound) for another user's notification
#[tokio::test]
async fn access_scoped_to_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let alice = factory::user::create_user(db.connection()).await?;
    let bob = factory::user::create_user(db.connection()).await?;
    let notification =
        factory::notification::create_notification(db.connection(), alice.id).await?;

    let service = NotificationService::new(&db);

    let fetch = service.get_notification(notification.id, bob.id).await;
    assert!(matches!(fetch, Err(AppError::NotFound(_))));

    let delete = service.delete_notification(notification.id, bob.id).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));

    // Still visible to the actual recipient.
    let fetched = service.get_notification(notification.id, alice.id).await?;
    assert_eq!(fetched.id, notification.id);

    Ok(())
}

/// Tests clearing the whole inbox.
///
/// Expected: Ok with only the caller's notifications removed
#[tokio::test]
async fn delete_all_clears_own_inbox() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let alice = factory::user::create_user(db.connection()).await?;
    let bob = factory::user::create_user(db.connection()).await?;

    factory::notification::create_notification(db.connection(), alice.id).await?;
    factory::notification::create_notification(db.connection(), alice.id).await?;
    factory::notification::create_notification(db.connection(), bob.id).await?;

    let service = NotificationService::new(&db);
    let removed = service.delete_all(alice.id).await?;
    assert_eq!(removed, 2);

    let remaining = service
        .list_notifications(ListNotificationsParams {
            user_id: bob.id,
            page: 1,
            per_page: 10,
            unread_only: false,
        })
        .await?;
    assert_eq!(remaining.total, 1);

    Ok(())
}
