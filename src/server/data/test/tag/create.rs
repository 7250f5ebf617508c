use super::*;

/// Tests creating a tag with explicit fields.
///
/// Expected: Ok with tag created and zero usage
#[tokio::test]
async fn creates_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParams {
            name: "rust".to_string(),
            description: Some("The Rust programming language".to_string()),
            color: Some("#dea584".to_string()),
        })
        .await?;

    assert_eq!(tag.name, "rust");
    assert_eq!(tag.description.as_deref(), Some("The Rust programming language"));
    assert_eq!(tag.color, "#dea584");
    assert_eq!(tag.usage_count, 0);

    Ok(())
}

/// Tests that a missing color falls back to the default.
///
/// Expected: Ok with the default gray color
#[tokio::test]
async fn applies_default_color() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParams {
            name: "plain".to_string(),
            description: None,
            color: None,
        })
        .await?;

    assert!(!tag.color.is_empty());

    Ok(())
}

/// Tests that a duplicate name is rejected by the unique constraint.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_qa_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    repo.create(CreateTagParams {
        name: "unique-tag".to_string(),
        description: None,
        color: None,
    })
    .await?;

    let result = repo
        .create(CreateTagParams {
            name: "unique-tag".to_string(),
            description: None,
            color: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
