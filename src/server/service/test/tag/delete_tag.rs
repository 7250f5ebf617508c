use super::*;

/// Tests deleting a tag no question uses.
///
/// Expected: Ok with the row gone
#[tokio::test]
async fn deletes_unused_tag() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let tag = factory::tag::create_tag_with_name(db.connection(), "obsolete").await?;

    let service = TagService::new(&db);
    service.delete_tag(tag.id).await?;

    assert!(matches!(
        service.get_tag("obsolete").await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests deleting a tag that is still linked to questions.
///
/// Expected: Err(Conflict) with the row kept
#[tokio::test]
async fn used_tag_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let tag = factory::tag::TagFactory::new(db.connection())
        .name("busy")
        .usage_count(3)
        .build()
        .await?;

    let service = TagService::new(&db);
    let result = service.delete_tag(tag.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(service.get_tag("busy").await?.id, tag.id);

    Ok(())
}

/// Tests deleting a tag that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn missing_tag_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let service = TagService::new(&db);
    let result = service.delete_tag(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
