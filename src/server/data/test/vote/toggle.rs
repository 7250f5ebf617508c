use super::*;

/// Tests switching a vote's direction in place.
///
/// Expected: Ok with the same row carrying the new direction
#[tokio::test]
async fn switches_vote_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, question, _) = factory::helpers::create_answered_question(db).await?;

    let repo = VoteRepository::new(db);
    let vote = repo
        .create(voter.id, VoteTarget::Question, question.id, 1)
        .await?;
    let vote_id = vote.id;

    let switched = repo.update_vote_type(vote, -1).await?;

    assert_eq!(switched.id, vote_id);
    assert_eq!(switched.vote_type, -1);

    Ok(())
}

/// Tests cancelling a vote by deleting its row.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn deletes_vote_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, voter, question, _) = factory::helpers::create_answered_question(db).await?;

    let repo = VoteRepository::new(db);
    let vote = repo
        .create(voter.id, VoteTarget::Question, question.id, 1)
        .await?;

    repo.delete(vote).await?;

    assert!(repo
        .find_by_user_and_target(voter.id, VoteTarget::Question, question.id)
        .await?
        .is_none());

    Ok(())
}
