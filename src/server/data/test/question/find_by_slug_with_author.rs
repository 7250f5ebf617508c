use super::*;

/// Tests looking a question up by slug.
///
/// Expected: Ok(Some) with the author attached
#[tokio::test]
async fn finds_question_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let question = test_utils::factory::question::QuestionFactory::new(db, user.id)
        .slug("findable-slug")
        .build()
        .await?;

    let repo = QuestionRepository::new(db);
    let row = repo.find_by_slug_with_author("findable-slug").await?;

    let (found, author) = row.unwrap();
    assert_eq!(found.id, question.id);
    assert_eq!(author.unwrap().id, user.id);

    Ok(())
}

/// Tests looking up a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);

    assert!(repo.find_by_slug_with_author("missing").await?.is_none());

    Ok(())
}
