use super::*;

/// Tests marking a single notification read.
///
/// Expected: Ok with the read flag set and the unread count reduced
#[tokio::test]
async fn mark_read_flips_flag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;
    let notification = factory::notification::create_notification(db.connection(), user.id).await?;

    let service = NotificationService::new(&db);
    assert_eq!(service.unread_count(user.id).await?, 1);

    let updated = service.mark_read(notification.id, user.id).await?;
    assert!(updated.is_read);
    assert_eq!(service.unread_count(user.id).await?, 0);

    Ok(())
}

/// Tests that only the recipient can mark a notification read.
///
/// Expected: Err(NotFound) and the notification stays unread
#[tokio::test]
async fn mark_read_scoped_to_recipient() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let alice = factory::user::create_user(db.connection()).await?;
    let bob = factory::user::create_user(db.connection()).await?;
    let notification =
        factory::notification::create_notification(db.connection(), alice.id).await?;

    let service = NotificationService::new(&db);
    let result = service.mark_read(notification.id, bob.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.unread_count(alice.id).await?, 1);

    Ok(())
}

/// Tests marking the whole inbox read.
///
/// Expected: Ok with the number of flipped notifications returned
#[tokio::test]
async fn mark_all_read_counts_flipped() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;
    for _ in 0..3 {
        factory::notification::create_notification(db.connection(), user.id).await?;
    }
    factory::notification::NotificationFactory::new(db.connection(), user.id)
        .is_read(true)
        .build()
        .await?;

    let service = NotificationService::new(&db);
    let flipped = service.mark_all_read(user.id).await?;
    assert_eq!(flipped, 3);
    assert_eq!(service.unread_count(user.id).await?, 0);

    Ok(())
}
