use super::*;

/// Tests registering a fresh account.
///
/// Expected: Ok with a stored user, a hashed password, and a verifiable token
#[tokio::test]
async fn registers_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let outcome = service
        .register(
            "alice".to_string(),
            " Alice@Example.com ".to_string(),
            "Password1".to_string(),
        )
        .await?;

    assert_eq!(outcome.user.username, "alice");
    assert_eq!(outcome.user.email, "alice@example.com");
    assert_eq!(outcome.user.role, "user");
    assert_eq!(outcome.user.reputation, 0);
    assert_ne!(outcome.user.password_hash, "Password1");

    let claims = jwt.verify(&outcome.token, PURPOSE_AUTH)?;
    assert_eq!(claims.sub, outcome.user.id);

    Ok(())
}

/// Tests registering with a username that is already taken.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn duplicate_username_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let existing = factory::user::UserFactory::new(db.connection())
        .username("alice")
        .build()
        .await?;

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let result = service
        .register(
            "alice".to_string(),
            "other@example.com".to_string(),
            "Password1".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_ne!(existing.email, "other@example.com");

    Ok(())
}

/// Tests registering with an email that is already taken.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn duplicate_email_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    factory::user::UserFactory::new(db.connection())
        .email("alice@example.com")
        .build()
        .await?;

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let result = service
        .register(
            "someone-else".to_string(),
            "ALICE@example.com".to_string(),
            "Password1".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registering with a password missing required character classes.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn weak_password_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let result = service
        .register(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "alllowercase".to_string(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(UserRepository::new(db.connection())
        .find_by_username("alice")
        .await?
        .is_none());

    Ok(())
}
