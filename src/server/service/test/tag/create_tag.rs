use super::*;

/// Tests creating a tag with a mixed-case, padded name.
///
/// Expected: Ok with the name normalized to lowercase
#[tokio::test]
async fn normalizes_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let service = TagService::new(&db);
    let tag = service
        .create_tag(CreateTagParams {
            name: "  Rust  ".to_string(),
            description: Some("The Rust programming language".to_string()),
            color: None,
        })
        .await?;

    assert_eq!(tag.name, "rust");
    assert_eq!(tag.usage_count, 0);

    Ok(())
}

/// Tests creating a tag whose name is already taken.
///
/// Expected: Err(Conflict), also for a differently-cased spelling
#[tokio::test]
async fn duplicate_name_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    factory::tag::create_tag_with_name(db.connection(), "rust").await?;

    let service = TagService::new(&db);
    let result = service
        .create_tag(CreateTagParams {
            name: "RUST".to_string(),
            description: None,
            color: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests validation of a name carrying illegal characters.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_invalid_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let service = TagService::new(&db);
    let result = service
        .create_tag(CreateTagParams {
            name: "no spaces!".to_string(),
            description: None,
            color: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests updating a tag's description and color.
///
/// Expected: Ok with the new fields and the name untouched
#[tokio::test]
async fn update_changes_description_and_color() -> Result<(), AppError> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = wrap(&test);

    let tag = factory::tag::create_tag_with_name(db.connection(), "rust").await?;

    let service = TagService::new(&db);
    let updated = service
        .update_tag(
            tag.id,
            UpdateTagParams {
                description: Some("Systems programming language".to_string()),
                color: Some("#dea584".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.name, "rust");
    assert_eq!(
        updated.description.as_deref(),
        Some("Systems programming language")
    );
    assert_eq!(updated.color, "#dea584");

    Ok(())
}
