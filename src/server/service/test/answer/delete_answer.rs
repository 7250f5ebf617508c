use super::*;

/// Tests deleting an answer as its author.
///
/// Expected: Ok with the row gone and answer_count decremented
#[tokio::test]
async fn author_deletes_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, answerer, question, _) =
        factory::helpers::create_answered_question(db.connection()).await?;

    // Route through the service so the counter is consistent beforehand
    let service = AnswerService::new(&db);
    let created = service
        .create_answer(
            &answerer,
            CreateAnswerParams {
                question_id: question.id,
                user_id: answerer.id,
                content: "A second answer that will be deleted again shortly.".to_string(),
            },
        )
        .await?;

    service.delete_answer(&answerer, created.answer.id).await?;

    assert!(AnswerRepository::new(db.connection())
        .find_by_id(created.answer.id)
        .await?
        .is_none());

    let stored = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    assert_eq!(stored.answer_count, 0);

    Ok(())
}

/// Tests that deleting the accepted answer clears the question's pointer.
///
/// Expected: Ok with accepted_answer_id back to None
#[tokio::test]
async fn deleting_accepted_answer_clears_pointer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (asker, answerer, question, answer) =
        factory::helpers::create_answered_question(db.connection()).await?;

    let service = AnswerService::new(&db);
    service.accept_answer(&asker, answer.id).await?;
    service.delete_answer(&answerer, answer.id).await?;

    let stored = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    assert_eq!(stored.accepted_answer_id, None);

    Ok(())
}

/// Tests that a third party cannot delete someone's answer.
///
/// Expected: Err(AuthErr) with the row untouched
#[tokio::test]
async fn stranger_cannot_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, _, _, answer) = factory::helpers::create_answered_question(db.connection()).await?;
    let stranger = factory::user::create_user(db.connection()).await?;

    let service = AnswerService::new(&db);
    let result = service.delete_answer(&stranger, answer.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InsufficientPermissions))
    ));
    assert!(AnswerRepository::new(db.connection())
        .find_by_id(answer.id)
        .await?
        .is_some());

    Ok(())
}

/// Tests that a moderator may delete any answer.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn moderator_deletes_any_answer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, _, _, answer) = factory::helpers::create_answered_question(db.connection()).await?;
    let moderator = factory::user::create_moderator(db.connection()).await?;

    let service = AnswerService::new(&db);
    service.delete_answer(&moderator, answer.id).await?;

    assert!(AnswerRepository::new(db.connection())
        .find_by_id(answer.id)
        .await?
        .is_none());

    Ok(())
}
