use super::*;

/// Tests bumping the view counter.
///
/// Expected: Ok with view_count incremented per call
#[tokio::test]
async fn increments_view_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let question = factory::question::create_question(db, user.id).await?;

    let repo = QuestionRepository::new(db);
    repo.increment_view_count(question.id).await?;
    repo.increment_view_count(question.id).await?;

    let stored = repo.find_by_id(question.id).await?.unwrap();
    assert_eq!(stored.view_count, 2);

    Ok(())
}

/// Tests applying signed vote deltas.
///
/// Expected: Ok with vote_count reflecting the accumulated deltas
#[tokio::test]
async fn applies_vote_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let question = factory::question::create_question(db, user.id).await?;

    let repo = QuestionRepository::new(db);
    repo.apply_vote_delta(question.id, 1).await?;
    repo.apply_vote_delta(question.id, 1).await?;
    repo.apply_vote_delta(question.id, -2).await?;

    let stored = repo.find_by_id(question.id).await?.unwrap();
    assert_eq!(stored.vote_count, 0);

    Ok(())
}

/// Tests adjusting the answer counter in both directions.
///
/// Expected: Ok with answer_count following the deltas
#[tokio::test]
async fn adjusts_answer_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let question = factory::question::create_question(db, user.id).await?;

    let repo = QuestionRepository::new(db);
    repo.adjust_answer_count(question.id, 1).await?;
    repo.adjust_answer_count(question.id, 1).await?;
    repo.adjust_answer_count(question.id, -1).await?;

    let stored = repo.find_by_id(question.id).await?.unwrap();
    assert_eq!(stored.answer_count, 1);

    Ok(())
}

/// Tests setting and clearing the accepted answer pointer.
///
/// Expected: Ok with accepted_answer_id following the updates
#[tokio::test]
async fn sets_and_clears_accepted_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let question = factory::question::create_question(db, user.id).await?;
    let answer = factory::answer::create_answer(db, question.id, user.id).await?;

    let repo = QuestionRepository::new(db);

    repo.set_accepted_answer(question.id, Some(answer.id)).await?;
    let stored = repo.find_by_id(question.id).await?.unwrap();
    assert_eq!(stored.accepted_answer_id, Some(answer.id));

    repo.set_accepted_answer(question.id, None).await?;
    let stored = repo.find_by_id(question.id).await?.unwrap();
    assert_eq!(stored.accepted_answer_id, None);

    Ok(())
}
