use super::*;

/// Tests deleting a question as its author.
///
/// Expected: Ok with the row gone and tag usage counts released
#[tokio::test]
async fn author_deletes_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;

    let service = QuestionService::new(&db);
    let detail = service
        .create_question(
            &user,
            CreateQuestionParams {
                user_id: user.id,
                title: "How do I delete my own question".to_string(),
                description: "Asking so I can remove this immediately afterwards.".to_string(),
                tags: vec!["meta".to_string()],
            },
        )
        .await?;

    service.delete_question(&user, detail.question.id).await?;

    assert!(QuestionRepository::new(db.connection())
        .find_by_id(detail.question.id)
        .await?
        .is_none());

    let tag = TagRepository::new(db.connection())
        .find_by_name("meta")
        .await?
        .unwrap();
    assert_eq!(tag.usage_count, 0);

    Ok(())
}

/// Tests that a user cannot delete someone else's question.
///
/// Expected: Err(AuthErr) with the row untouched
#[tokio::test]
async fn stranger_cannot_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, question) = factory::helpers::create_question_with_author(db.connection()).await?;
    let stranger = factory::user::create_user(db.connection()).await?;

    let service = QuestionService::new(&db);
    let result = service.delete_question(&stranger, question.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InsufficientPermissions))
    ));
    assert!(QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a question that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_question_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let user = factory::user::create_user(db.connection()).await?;

    let service = QuestionService::new(&db);
    let result = service.delete_question(&user, 9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a moderator may delete another user's question.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn moderator_deletes_any_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, question) = factory::helpers::create_question_with_author(db.connection()).await?;
    let moderator = factory::user::create_moderator(db.connection()).await?;

    let service = QuestionService::new(&db);
    service.delete_question(&moderator, question.id).await?;

    assert!(QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .is_none());

    Ok(())
}
