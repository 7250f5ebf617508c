use super::*;

/// Tests setting the accepted flag on an answer.
///
/// Expected: Ok with is_accepted true
#[tokio::test]
async fn sets_accepted_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, answer) = factory::helpers::create_answered_question(db).await?;

    let repo = AnswerRepository::new(db);
    let updated = repo.set_accepted(answer.id, true).await?;

    assert!(updated.is_accepted);

    Ok(())
}

/// Tests clearing the accepted flag from every answer of a question.
///
/// Expected: Ok with the number of cleared rows and no flags remaining
#[tokio::test]
async fn clears_accepted_for_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let question = factory::question::create_question(db, user.id).await?;
    test_utils::factory::answer::AnswerFactory::new(db, question.id, user.id)
        .is_accepted(true)
        .build()
        .await?;
    factory::answer::create_answer(db, question.id, user.id).await?;

    let repo = AnswerRepository::new(db);
    let cleared = repo.clear_accepted_for_question(question.id).await?;

    assert_eq!(cleared, 1);

    let (rows, _) = repo
        .list_by_question(question.id, 0, 10, AnswerSort::Votes)
        .await?;
    assert!(rows.iter().all(|(a, _)| !a.is_accepted));

    Ok(())
}
