use super::*;

/// Tests that an unused slug reports as free.
///
/// Expected: Ok(false)
#[tokio::test]
async fn free_slug_reports_false() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);

    assert!(!repo.slug_exists("unused-slug", None).await?);

    Ok(())
}

/// Tests that a taken slug reports as taken.
///
/// Expected: Ok(true)
#[tokio::test]
async fn taken_slug_reports_true() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    test_utils::factory::question::QuestionFactory::new(db, user.id)
        .slug("taken-slug")
        .build()
        .await?;

    let repo = QuestionRepository::new(db);

    assert!(repo.slug_exists("taken-slug", None).await?);

    Ok(())
}

/// Tests that the exclusion ID lets a question keep its own slug.
///
/// A title update re-derives the slug; the question's own row must not count
/// as a collision.
///
/// Expected: Ok(false) when excluding the owning question
#[tokio::test]
async fn excluded_question_does_not_collide_with_itself() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let question = test_utils::factory::question::QuestionFactory::new(db, user.id)
        .slug("my-own-slug")
        .build()
        .await?;

    let repo = QuestionRepository::new(db);

    assert!(!repo.slug_exists("my-own-slug", Some(question.id)).await?);
    assert!(repo.slug_exists("my-own-slug", Some(question.id + 1)).await?);

    Ok(())
}
