use super::*;

/// Tests tallying votes on one target.
///
/// Expected: Ok with upvotes, downvotes, and signed total
#[tokio::test]
async fn tallies_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, question, _) = factory::helpers::create_answered_question(db).await?;
    let voters = [
        factory::user::create_user(db).await?,
        factory::user::create_user(db).await?,
        factory::user::create_user(db).await?,
    ];

    let repo = VoteRepository::new(db);
    repo.create(voters[0].id, VoteTarget::Question, question.id, 1)
        .await?;
    repo.create(voters[1].id, VoteTarget::Question, question.id, 1)
        .await?;
    repo.create(voters[2].id, VoteTarget::Question, question.id, -1)
        .await?;

    let counts = repo
        .count_for_target(VoteTarget::Question, question.id)
        .await?;

    assert_eq!(counts.upvotes, 2);
    assert_eq!(counts.downvotes, 1);
    assert_eq!(counts.total, 1);

    Ok(())
}

/// Tests tallying a target nobody voted on.
///
/// Expected: Ok with all zeroes
#[tokio::test]
async fn empty_target_tallies_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VoteRepository::new(db);
    let counts = repo.count_for_target(VoteTarget::Answer, 42).await?;

    assert_eq!(counts.upvotes, 0);
    assert_eq!(counts.downvotes, 0);
    assert_eq!(counts.total, 0);

    Ok(())
}
