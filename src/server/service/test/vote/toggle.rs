use super::*;

/// Tests that repeating the same vote cancels it.
///
/// Two identical upvotes must leave the world exactly as it started: no vote
/// row, zero vote_count, and the author's reputation restored.
///
/// Expected: Ok with everything back to the initial state
#[tokio::test]
async fn same_vote_twice_nets_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (author, question) =
        factory::helpers::create_question_with_author(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    let params = CastVoteParams {
        user_id: voter.id,
        target: VoteTarget::Question,
        target_id: question.id,
        vote_type: 1,
    };

    service.cast_vote(params.clone()).await?;
    let outcome = service.cast_vote(params).await?;

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

    assert!(VoteRepository::new(db.connection())
        .find_by_user_and_target(voter.id, VoteTarget::Question, question.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests switching an upvote to a downvote on an answer.
///
/// The counter moves by two and the author's reputation swings from the
/// upvote weight to the downvote weight, +10 to -2.
///
/// Expected: Ok with vote_count -1 and reputation -2
#[tokio::test]
async fn switch_moves_count_by_two() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let (_, answerer, _, answer) =
        factory::helpers::create_answered_question(db.connection()).await?;
    let voter = factory::user::create_user(db.connection()).await?;

    let service = VoteService::new(&db);
    service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Answer,
            target_id: answer.id,
            vote_type: 1,
        })
        .await?;

    let after_up = UserRepository::new(db.connection())
        .find_by_id(answerer.id)
        .await?
        .unwrap();
    assert_eq!(after_up.reputation, 10);

    let outcome = service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Answer,
            target_id: answer.id,
            vote_type: -1,
        })
        .await?;

    assert_eq!(outcome.vote_type, -1);
    assert_eq!(outcome.previous_vote_type, 1);
    assert_eq!(outcome.counts.total, -1);

    let after_switch = UserRepository::new(db.connection())
        .find_by_id(answerer.id)
        .await?
        .unwrap();
    assert_eq!(after_switch.reputation, -2);

    Ok(())
}

/// Tests that switching a downvote to an upvote notifies the author.
///
/// The vote lands as a net-new upvote, so it counts as one.
///
/// Expected: Ok with one notification after the switch
#[tokio::test]
async fn switch_to_upvote_notifies() -> Result<(), AppError> {
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
            vote_type: -1,
        })
        .await?;

    let notifications = crate::server::data::notification::NotificationRepository::new(
        db.connection(),
    );
    assert_eq!(notifications.unread_count(author.id).await?, 0);

    service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Question,
            target_id: question.id,
            vote_type: 1,
        })
        .await?;

    assert_eq!(notifications.unread_count(author.id).await?, 1);

    Ok(())
}

/// Tests the full upvote-then-switch scenario on a question.
///
/// The upvote produces vote_count 1, reputation +5, and one notification.
/// Switching to a downvote moves the counter to -1 and reputation to -2,
/// but it is not a new upvote, so no second notification appears.
///
/// Expected: Ok with exactly one notification throughout
#[tokio::test]
async fn switch_to_downvote_does_not_renotify() -> Result<(), AppError> {
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

    let notifications = crate::server::data::notification::NotificationRepository::new(
        db.connection(),
    );
    assert_eq!(notifications.unread_count(author.id).await?, 1);

    let after_up = QuestionRepository::new(db.connection())
        .find_by_id(question.id)
        .await?
        .unwrap();
    assert_eq!(after_up.vote_count, 1);

    let outcome = service
        .cast_vote(CastVoteParams {
            user_id: voter.id,
            target: VoteTarget::Question,
            target_id: question.id,
            vote_type: -1,
        })
        .await?;
    assert_eq!(outcome.counts.total, -1);

    let stored_author = UserRepository::new(db.connection())
        .find_by_id(author.id)
        .await?
        .unwrap();
    assert_eq!(stored_author.reputation, -2);

    assert_eq!(notifications.unread_count(author.id).await?, 1);

    Ok(())
}
