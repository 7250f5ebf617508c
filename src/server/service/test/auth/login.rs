use super::*;
use test_utils::factory::user::DEFAULT_PASSWORD;

/// Tests logging in with correct credentials.
///
/// Expected: Ok with a token that verifies against the auth purpose
#[tokio::test]
async fn login_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let outcome = service.login(&user.email, DEFAULT_PASSWORD).await?;

    assert_eq!(outcome.user.id, user.id);
    let claims = jwt.verify(&outcome.token, PURPOSE_AUTH)?;
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, user.role);

    Ok(())
}

/// Tests that the email lookup ignores case and padding.
///
/// Expected: Ok for a shouted, padded spelling of the stored email
#[tokio::test]
async fn login_normalizes_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::UserFactory::new(db.connection())
        .email("alice@example.com")
        .build()
        .await?;

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let outcome = service
        .login(" ALICE@EXAMPLE.COM ", DEFAULT_PASSWORD)
        .await?;

    assert_eq!(outcome.user.id, user.id);

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(AuthErr(InvalidCredentials))
#[tokio::test]
async fn wrong_password_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let result = service.login(&user.email, "WrongPassword1").await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an email no account uses.
///
/// Expected: Err(AuthErr(InvalidCredentials)), indistinguishable from a bad
/// password
#[tokio::test]
async fn unknown_email_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let jwt = codec();
    let service = AuthService::new(&db, &jwt, TEST_BCRYPT_COST);
    let result = service.login("ghost@example.com", DEFAULT_PASSWORD).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
