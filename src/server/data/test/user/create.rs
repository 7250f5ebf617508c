use super::*;

/// Tests creating a new account.
///
/// Expected: Ok with the user role and zero reputation
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, ROLE_USER);
    assert_eq!(user.reputation, 0);

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique constraint.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        password_hash: "hash".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "bob".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the username and email lookups.
///
/// Expected: Ok(Some) for stored values, Ok(None) otherwise
#[tokio::test]
async fn finds_by_username_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::UserFactory::new(db)
        .username("carol")
        .email("carol@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_username("carol").await?.map(|u| u.id),
        Some(user.id)
    );
    assert_eq!(
        repo.find_by_email("carol@example.com").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_username("nobody").await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
