use super::*;

/// Tests linking a tag to a question.
///
/// Expected: Ok(true) on first link, Ok(false) when already linked
#[tokio::test]
async fn link_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question) = factory::helpers::create_question_with_author(db).await?;
    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);

    assert!(repo.link(question.id, tag.id).await?);
    assert!(!repo.link(question.id, tag.id).await?);

    Ok(())
}

/// Tests unlinking a tag from a question.
///
/// Expected: Ok(true) when the link existed, Ok(false) otherwise
#[tokio::test]
async fn unlink_reports_removal() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question) = factory::helpers::create_question_with_author(db).await?;
    let tag = factory::tag::create_tag(db).await?;

    let repo = TagRepository::new(db);
    repo.link(question.id, tag.id).await?;

    assert!(repo.unlink(question.id, tag.id).await?);
    assert!(!repo.unlink(question.id, tag.id).await?);

    Ok(())
}

/// Tests fetching the tags linked to a question, name-ordered.
///
/// Expected: Ok with only linked tags, in name order
#[tokio::test]
async fn lists_tags_for_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, question) = factory::helpers::create_question_with_author(db).await?;
    let zebra = factory::tag::create_tag_with_name(db, "zebra").await?;
    let alpha = factory::tag::create_tag_with_name(db, "alpha").await?;
    let unlinked = factory::tag::create_tag_with_name(db, "unlinked").await?;

    let repo = TagRepository::new(db);
    repo.link(question.id, zebra.id).await?;
    repo.link(question.id, alpha.id).await?;

    let tags = repo.for_question(question.id).await?;

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "alpha");
    assert_eq!(tags[1].name, "zebra");
    assert!(tags.iter().all(|t| t.id != unlinked.id));

    Ok(())
}
