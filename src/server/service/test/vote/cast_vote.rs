use super::*;

/// Tests casting a fresh upvote on a question.
///
/// Verifies the vote row, the question's denormalized vote_count, the
/// author's reputation gain, and the upvote notification all land together.
///
/// Expected: Ok with vote_count 1 and author reputation +5
#[tokio::test]
async fn upvote_updates_count_reputation_and_notifies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (author, question) =
        factory::helpers::create_question_with_author(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    let outcome = service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Question,
            target_id: question.id,
            vote_type: 1,
        })
        .await?;

    assert_eq!(outcome.vote_type, 1);
    assert_eq!(outcome.previous_vote_type, 0);
    assert_eq!(outcome.counts.total, 1);

    let stored = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    assert_eq!(stored.vote_count, 1);

    let stored_author = UserRepository::new(db.connection())
        .find_by_id(author.id)
        .await?
        .unwrap();
    assert_eq!(stored_author.reputation, 5);

    let unread = crate::server::data::notification::NotificationRepository::new(db.connection())
        .unread_count(author.id)
        .await?;
    assert_eq!(unread, 1);

    Ok(())
}

/// Tests casting a downvote on an answer.
///
/// Expected: Ok with vote_count -1, author reputation -2, and no notification
#[tokio::test]
async fn downvote_does_not_notify() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, answerer, _, answer) =
        factory::helpers::create_answered_question(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    let outcome = service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Answer,
            target_id: answer.id,
            vote_type: -1,
        })
        .await?;

    assert_eq!(outcome.counts.total, -1);

    let stored_author = UserRepository::new(db.connection())
        .find_by_id(answerer.id)
        .await?
        .unwrap();
    assert_eq!(stored_author.reputation, -2);

    let unread = crate::server::data::notification::NotificationRepository::new(db.connection())
        .unread_count(answerer.id)
        .await?;
    assert_eq!(unread, 0);

    Ok(())
}

/// Tests that voting on your own content is rejected.
///
/// Expected: Err(BadRequest) with nothing written
#[tokio::test]
async fn rejects_self_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (author, question) =
        factory::helpers::create_question_with_author(db.connection()).await?;

    let service = VoteService::new(&db);
    let result = service
        .cast_vote(CastVoteParams {
            user_id: author.id,
            target: VoteTarget::Question,
            target_id: question.id,
            vote_type: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    assert_eq!(stored.vote_count, 0);

    Ok(())
}

/// Tests voting on a target that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    let result = service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Question,
            target_id: 9999,
            vote_type: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests a vote direction outside plus or minus one.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_invalid_direction() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, question) = factory::helpers::create_question_with_author(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    let result = service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Question,
            target_id: question.id,
            vote_type: 2,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that the stored vote_count always equals the signed tally.
///
/// Three voters up, one down; the denormalized counter and the row tally
/// must agree.
///
/// Expected: Ok with vote_count equal to the vote rows' sum
#[tokio::test]
async fn vote_count_matches_tally() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, question) = factory::helpers::create_question_with_author(db.connection()).await?;

    let service = VoteService::new(&db);
    for direction in [1, 1, 1, -1] {
        let voter = factory::user::create_user(db.connection()).await?;
        service
            .cast_vote(CastVoteParams {
                user_id: voter.id,
                target: VoteTarget::Question,
                target_id: question.id,
                vote_type: direction,
            })
            .await?;
    }

    let stored = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    let counts = VoteRepository::new(db.connection())
        .count_for_target(VoteTarget::Question, question.id)
        .await?;

    assert_eq!(stored.vote_count, 2);
    assert_eq!(counts.total as i32, stored.vote_count);
    assert_eq!(counts.upvotes, 3);
    assert_eq!(counts.downvotes, 1);

    Ok(())
}
