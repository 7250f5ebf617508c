use super::*;

/// Tests explicitly removing an existing vote.
///
/// Expected: Ok with counter and reputation rolled back
#[tokio::test]
async fn removes_existing_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (author, question) =
        factory::helpers::create_question_with_author(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Question,
            target_id: question.id,
            vote_type: 1,
        })
        .await?;

    let outcome = service
        .remove_vote(voter.id, VoteTarget::Question, question.id)
        .await?;

    assert_eq!(outcome.vote_type, 0);
    assert_eq!(outcome.previous_vote_type, 1);
    assert_eq!(outcome.counts.total, 0);

    let stored = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    assert_eq!(stored.vote_count, 0);

    let stored_author = UserRepository::new(db.connection())
        .find_by_id(author.id)
        .await?
        .unwrap();
    assert_eq!(stored_author.reputation, 0);

    Ok(())
}

/// Tests removing a vote that was never cast.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_vote_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, question) = factory::helpers::create_question_with_author(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    let result = service
        .remove_vote(voter.id, VoteTarget::Question, question.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests reading the caller's current vote.
///
/// Expected: Ok with direction 0 before voting and the cast direction after
#[tokio::test]
async fn reports_user_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, question) = factory::helpers::create_question_with_author(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);

    let before = service
        .get_user_vote(voter.id, VoteTarget::Question, question.id)
        .await?;
    assert_eq!(before.vote_type, 0);

    service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Question,
            target_id: question.id,
            vote_type: -1,
        })
        .await?;

    let after = service
        .get_user_vote(voter.id, VoteTarget::Question, question.id)
        .await?;
    assert_eq!(after.vote_type, -1);

    Ok(())
}
