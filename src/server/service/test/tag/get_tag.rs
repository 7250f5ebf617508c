use super::*;

/// Tests looking a tag up by numeric ID.
///
/// Expected: Ok with the matching row
#[tokio::test]
async fn finds_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let tag = factory::tag::create_tag_with_name(db.connection(), "rust").await?;

    let service = TagService::new(&db);
    let found = service.get_tag(&tag.id.to_string()).await?;

    assert_eq!(found.id, tag.id);
    assert_eq!(found.name, "rust");

    Ok(())
}

/// Tests looking a tag up by name, ignoring case.
///
/// Expected: Ok with the matching row
#[tokio::test]
async fn finds_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let tag = factory::tag::create_tag_with_name(db.connection(), "rust").await?;

    let service = TagService::new(&db);
    let found = service.get_tag("Rust").await?;

    assert_eq!(found.id, tag.id);

    Ok(())
}

/// Tests looking up a tag that does not exist.
///
/// Expected: Err(NotFound) for both an unknown ID and an unknown name
#[tokio::test]
async fn missing_tag_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let service = TagService::new(&db);

    assert!(matches!(
        service.get_tag("9999").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_tag("no-such-tag").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
