use super::*;

/// Tests that the list joins each question with its author.
///
/// Expected: Ok with author attached to every row
#[tokio::test]
async fn lists_questions_with_authors() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::question::create_question(db, user.id).await?;
    factory::question::create_question(db, user.id).await?;

    let repo = QuestionRepository::new(db);
    let (rows, totals) = repo
        .list(0, 10, None, None, None, QuestionSort::Newest)
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(totals.number_of_items, 2);
    for (_, author) in &rows {
        assert_eq!(author.as_ref().map(|a| a.id), Some(user.id));
    }

    Ok(())
}

/// Tests case-insensitive search over title and description.
///
/// Expected: Ok with only matching questions returned
#[tokio::test]
async fn search_matches_title_and_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    test_utils::factory::question::QuestionFactory::new(db, user.id)
        .title("Borrow checker fight")
        .description("The compiler will not let me borrow twice.")
        .build()
        .await?;
    test_utils::factory::question::QuestionFactory::new(db, user.id)
        .title("Unrelated topic")
        .description("This mentions BORROW only in the body.")
        .build()
        .await?;
    test_utils::factory::question::QuestionFactory::new(db, user.id)
        .title("Completely different")
        .description("Nothing relevant here.")
        .build()
        .await?;

    let repo = QuestionRepository::new(db);
    let (rows, totals) = repo
        .list(0, 10, Some("borrow"), None, None, QuestionSort::Newest)
        .await?;

    assert_eq!(totals.number_of_items, 2);
    assert_eq!(rows.len(), 2);

    Ok(())
}

/// Tests filtering the list by author.
///
/// Expected: Ok with only the author's questions returned
#[tokio::test]
async fn filters_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::create_user(db).await?;
    let bob = factory::user::create_user(db).await?;
    factory::question::create_question(db, alice.id).await?;
    factory::question::create_question(db, bob.id).await?;
    factory::question::create_question(db, bob.id).await?;

    let repo = QuestionRepository::new(db);
    let (rows, totals) = repo
        .list(0, 10, None, None, Some(bob.id), QuestionSort::Newest)
        .await?;

    assert_eq!(totals.number_of_items, 2);
    assert!(rows.iter().all(|(q, _)| q.user_id == bob.id));

    Ok(())
}

/// Tests ordering by vote count.
///
/// Expected: Ok with the highest-voted question first
#[tokio::test]
async fn sorts_by_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let low = test_utils::factory::question::QuestionFactory::new(db, user.id)
        .vote_count(1)
        .build()
        .await?;
    let high = test_utils::factory::question::QuestionFactory::new(db, user.id)
        .vote_count(7)
        .build()
        .await?;

    let repo = QuestionRepository::new(db);
    let (rows, _) = repo
        .list(0, 10, None, None, None, QuestionSort::Votes)
        .await?;

    assert_eq!(rows[0].0.id, high.id);
    assert_eq!(rows[1].0.id, low.id);

    Ok(())
}

/// Tests page totals for a multi-page result set.
///
/// Expected: Ok with correct item and page counts
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for _ in 0..5 {
        factory::question::create_question(db, user.id).await?;
    }

    let repo = QuestionRepository::new(db);
    let (rows, totals) = repo
        .list(1, 2, None, None, None, QuestionSort::Newest)
        .await?;

    assert_eq!(rows.len(), 2);
    assert_eq!(totals.number_of_items, 5);
    assert_eq!(totals.number_of_pages, 3);

    Ok(())
}
