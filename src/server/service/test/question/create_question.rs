use super::*;

/// Tests creating a question with tags through the service.
///
/// Expected: Ok with a slugified title, linked tags, and bumped usage counts
#[tokio::test]
async fn creates_question_with_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;

    let service = QuestionService::new(&db);
    let detail = service
        .create_question(
            &user,
            CreateQuestionParams {
                user_id: user.id,
                title: "How to Code in Rust".to_string(),
                description: "I would like to learn how to write Rust programs.".to_string(),
                tags: vec!["rust".to_string(), "beginner".to_string()],
            },
        )
        .await?;

    assert_eq!(detail.question.slug, "how-to-code-in-rust");
    assert_eq!(detail.question.user_id, user.id);
    assert_eq!(detail.tags.len(), 2);

    let rust = TagRepository::new(db.connection())
        .find_by_name("rust")
        .await?
        .unwrap();
    assert_eq!(rust.usage_count, 1);

    Ok(())
}

/// Tests that a colliding title gets a numeric slug suffix.
///
/// Expected: Ok with slugs "how-to-code-in-rust" then "how-to-code-in-rust-1"
#[tokio::test]
async fn colliding_titles_get_suffixed_slugs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;

    let service = QuestionService::new(&db);
    let params = CreateQuestionParams {
        user_id: user.id,
        title: "How to Code in Rust".to_string(),
        description: "I would like to learn how to write Rust programs.".to_string(),
        tags: vec!["rust".to_string()],
    };

    let first = service.create_question(&user, params.clone()).await?;
    let second = service.create_question(&user, params).await?;

    assert_eq!(first.question.slug, "how-to-code-in-rust");
    assert_eq!(second.question.slug, "how-to-code-in-rust-1");

    Ok(())
}

/// Tests that an existing tag is reused rather than duplicated.
///
/// Expected: Ok with the prior tag's ID and its usage count incremented
#[tokio::test]
async fn reuses_existing_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;
    let existing = factory::tag::create_tag_with_name(db.connection(), "rust").await?;

    let service = QuestionService::new(&db);
    let detail = service
        .create_question(
            &user,
            CreateQuestionParams {
                user_id: user.id,
                title: "How does borrow checking work".to_string(),
                description: "Looking for an explanation of the borrow checker rules.".to_string(),
                tags: vec!["Rust".to_string()],
            },
        )
        .await?;

    assert_eq!(detail.tags.len(), 1);
    assert_eq!(detail.tags[0].id, existing.id);

    let stored = TagRepository::new(db.connection())
        .find_by_name("rust")
        .await?
        .unwrap();
    assert_eq!(stored.usage_count, 1);

    Ok(())
}

/// Tests validation of a too-short title and missing tags.
///
/// Expected: Err(Validation) with one error per offending field
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;

    let service = QuestionService::new(&db);
    let result = service
        .create_question(
            &user,
            CreateQuestionParams {
                user_id: user.id,
                title: "Short".to_string(),
                description: "Too short".to_string(),
                tags: vec![],
            },
        )
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert_eq!(errors.len(), 3);
        }
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }

    Ok(())
}
