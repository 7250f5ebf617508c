use super::*;

/// Tests creating a new answer on a question.
///
/// Expected: Ok with answer created, unaccepted, and zero votes
#[tokio::test]
async fn creates_answer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, question) = factory::helpers::create_question_with_author(db).await?;

    let repo = AnswerRepository::new(db);
    let answer = repo
        .create(CreateAnswerParams {
            question_id: question.id,
            user_id: user.id,
            content: "You can solve this by reading the documentation.".to_string(),
        })
        .await?;

    assert_eq!(answer.question_id, question.id);
    assert_eq!(answer.user_id, user.id);
    assert!(!answer.is_accepted);
    assert_eq!(answer.vote_count, 0);

    // Verify answer exists in database
    let db_answer = entity::prelude::Answer::find_by_id(answer.id).one(db).await?;
    assert!(db_answer.is_some());

    Ok(())
}
