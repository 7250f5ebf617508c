use super::*;

/// Tests posting an answer to an active question.
///
/// The answer row, the question's answer_count, and the asker's
/// notification land together.
///
/// Expected: Ok with answer_count 1 and one notification for the asker
#[tokio::test]
async fn creates_answer_and_notifies_asker() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (asker, question) =
        factory::helpers::create_question_with_author(db.connection()).await?;
    let answerer = factory::user::create_user(db.connection()).await?;

    let service = AnswerService::new(&db);
    let created = service
        .create_answer(
            &answerer,
            CreateAnswerParams {
                question_id: question.id,
                user_id: answerer.id,
                content: "Use the question mark operator to propagate errors.".to_string(),
            },
        )
        .await?;

    assert_eq!(created.answer.question_id, question.id);
    assert!(!created.answer.is_accepted);

    let stored = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    assert_eq!(stored.answer_count, 1);

    let unread = crate::server::data::notification::NotificationRepository::new(db.connection())
        .unread_count(asker.id)
        .await?;
    assert_eq!(unread, 1);

    Ok(())
}

/// Tests answering your own question.
///
/// Allowed, but the author does not get notified about themselves.
///
/// Expected: Ok with no notification
#[tokio::test]
async fn self_answer_does_not_notify() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (asker, question) =
        factory::helpers::create_question_with_author(db.connection()).await?;

    let service = AnswerService::new(&db);
    service
        .create_answer(
            &asker,
            CreateAnswerParams {
                question_id: question.id,
                user_id: asker.id,
                content: "Answering my own question with the solution I found.".to_string(),
            },
        )
        .await?;

    let unread = crate::server::data::notification::NotificationRepository::new(db.connection())
        .unread_count(asker.id)
        .await?;
    assert_eq!(unread, 0);

    Ok(())
}

/// Tests answering a closed question.
///
/// Expected: Err(BadRequest) with no answer written
#[tokio::test]
async fn rejects_closed_question() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let asker = factory::user::create_user(db.connection()).await?;
    let question = test_utils::factory::question::QuestionFactory::new(db.connection(), asker.id)
        .status("closed")
        .build()
        .await?;
    let answerer = factory::user::create_user(db.connection()).await?;

    let service = AnswerService::new(&db);
    let result = service
        .create_answer(
            &answerer,
            CreateAnswerParams {
                question_id: question.id,
                user_id: answerer.id,
                content: "This answer should never make it into the database.".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let (rows, _) = AnswerRepository::new(db.connection())
        .list_by_question(question.id, 0, 10, AnswerSort::Votes)
        .await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests content length validation.
///
/// Expected: Err(Validation) for a too-short answer
#[tokio::test]
async fn rejects_short_content() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, question) = factory::helpers::create_question_with_author(db.connection()).await?;
    let answerer = factory::user::create_user(db.connection()).await?;

    let service = AnswerService::new(&db);
    let result = service
        .create_answer(
            &answerer,
            CreateAnswerParams {
                question_id: question.id,
                user_id: answerer.id,
                content: "too short".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
