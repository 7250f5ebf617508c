//! Question service for business logic.
//!
//! This module orchestrates question lifecycle: creation and updates with
//! slug assignment and tag association in one transaction, the list queries
//! with author and tag decoration, view counting on detail reads, and the
//! deletion bookkeeping that keeps tag usage counters honest ahead of the
//! foreign-key cascade.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::server::{
    data::{answer::AnswerRepository, question::QuestionRepository, tag::TagRepository},
    db::Db,
    error::{auth::AuthError, AppError},
    model::{
        answer::AnswerWithAuthor,
        question::{
            CreateQuestionParams, ListQuestionsParams, PaginatedQuestions, QuestionDetail,
            QuestionWithAuthor, UpdateQuestionParams,
        },
        user::can_moderate,
    },
    service::tag::set_question_tags,
    util::{
        slug::{generate_slug, slug_with_suffix},
        validate::Validator,
    },
};

/// Service providing business logic for questions.
pub struct QuestionService<'a> {
    pub db: &'a Db,
}

impl<'a> QuestionService<'a> {
    /// Creates a new QuestionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database handle
    ///
    /// # Returns
    /// - `QuestionService` - New service instance
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Creates a question with a unique slug and its tag associations.
    ///
    /// The slug probe, the question insert, and the tag linking run in one
    /// transaction. Concurrent creations of the same title can still race
    /// between probe and insert; the loser surfaces the unique violation.
    ///
    /// # Returns
    /// - `Ok(QuestionDetail)` - The created question with author and tags
    /// - `Err(AppError::Validation)` - Title, description, or tags invalid
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn create_question(
        &self,
        author: &entity::user::Model,
        params: CreateQuestionParams,
    ) -> Result<QuestionDetail, AppError> {
        let mut validator = Validator::new();
        validator.question_title(&params.title);
        validator.question_description(&params.description);
        validator.question_tags(&params.tags);
        validator.finish()?;

        let txn = self.db.begin().await?;

        let slug = assign_slug(&txn, &params.title, None).await?;
        let question = QuestionRepository::new(&txn)
            .create(params.user_id, params.title, params.description, slug)
            .await?;
        let tags = set_question_tags(&txn, question.id, &params.tags).await?;

        txn.commit().await?;

        Ok(QuestionDetail {
            question,
            author: Some(author.clone()),
            tags,
            answers: Vec::new(),
        })
    }

    /// Gets one question by ID with author, tags, and answers.
    ///
    /// Counts the read by bumping view_count before loading, so the returned
    /// payload already reflects this visit.
    ///
    /// # Returns
    /// - `Ok(QuestionDetail)` - The question
    /// - `Err(AppError::NotFound)` - No question with this ID
    /// - `Err(AppError)` - Database error
    pub async fn get_by_id(&self, id: i32) -> Result<QuestionDetail, AppError> {
        let repo = QuestionRepository::new(self.db.connection());
        repo.increment_view_count(id).await?;

        let row = repo
            .find_by_id_with_author(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        self.load_detail(row).await
    }

    /// Gets one question by slug with author, tags, and answers.
    ///
    /// # Returns
    /// - `Ok(QuestionDetail)` - The question
    /// - `Err(AppError::NotFound)` - No question with this slug
    /// - `Err(AppError)` - Database error
    pub async fn get_by_slug(&self, slug: &str) -> Result<QuestionDetail, AppError> {
        let repo = QuestionRepository::new(self.db.connection());
        let (question, author) = repo
            .find_by_slug_with_author(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        repo.increment_view_count(question.id).await?;

        let mut detail = self.load_detail((question, author)).await?;
        detail.question.view_count += 1;
        Ok(detail)
    }

    /// Gets a filtered, sorted page of questions with authors and tags.
    ///
    /// # Returns
    /// - `Ok(PaginatedQuestions)` - Questions with pagination metadata
    /// - `Err(AppError::NotFound)` - Tag filter names an unknown tag
    /// - `Err(AppError)` - Database error
    pub async fn list_questions(
        &self,
        params: ListQuestionsParams,
    ) -> Result<PaginatedQuestions, AppError> {
        let tag_id = match params.tag.as_deref() {
            Some(name) => {
                let tag = TagRepository::new(self.db.connection())
                    .find_by_name(&name.trim().to_lowercase())
                    .await?
                    .ok_or_else(|| AppError::NotFound("Tag not found".to_string()))?;
                Some(tag.id)
            }
            None => None,
        };

        let (rows, totals) = QuestionRepository::new(self.db.connection())
            .list(
                params.page - 1,
                params.per_page,
                params.search.as_deref(),
                tag_id,
                params.user_id,
                params.sort,
            )
            .await?;

        // One query decorates the whole page with tags.
        let question_ids: Vec<i32> = rows.iter().map(|(question, _)| question.id).collect();
        let mut tags_by_question: HashMap<i32, Vec<entity::tag::Model>> = HashMap::new();
        for (question_id, tag) in TagRepository::new(self.db.connection())
            .for_questions(&question_ids)
            .await?
        {
            tags_by_question.entry(question_id).or_default().push(tag);
        }

        Ok(PaginatedQuestions {
            questions: rows
                .into_iter()
                .map(|(question, author)| {
                    let tags = tags_by_question.remove(&question.id).unwrap_or_default();
                    QuestionWithAuthor {
                        question,
                        author,
                        tags,
                    }
                })
                .collect(),
            total: totals.number_of_items,
            page: params.page,
            per_page: params.per_page,
            total_pages: totals.number_of_pages,
        })
    }

    /// Updates a question's title, description, and tag set.
    ///
    /// Allowed for the question's author and for moderators/admins. A new
    /// title re-derives the slug with the question's own slug excluded from
    /// collision probing. A provided tag list replaces the associations
    /// entirely. Everything runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(QuestionDetail)` - The updated question with author and tags
    /// - `Err(AppError::Validation)` - Provided fields invalid
    /// - `Err(AppError::NotFound)` - No question with this ID
    /// - `Err(AppError::AuthErr)` - Actor may not edit this question (403)
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn update_question(
        &self,
        actor: &entity::user::Model,
        id: i32,
        params: UpdateQuestionParams,
    ) -> Result<QuestionDetail, AppError> {
        let mut validator = Validator::new();
        if let Some(ref title) = params.title {
            validator.question_title(title);
        }
        if let Some(ref description) = params.description {
            validator.question_description(description);
        }
        if let Some(ref tags) = params.tags {
            validator.question_tags(tags);
        }
        validator.finish()?;

        let (question, author) = QuestionRepository::new(self.db.connection())
            .find_by_id_with_author(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        if question.user_id != actor.id && !can_moderate(actor) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        let txn = self.db.begin().await?;

        // Slug travels with the title.
        let slug = match params.title.as_deref() {
            Some(title) if title != question.title => {
                Some(assign_slug(&txn, title, Some(question.id)).await?)
            }
            _ => None,
        };

        let question = QuestionRepository::new(&txn)
            .update(id, params.title, slug, params.description)
            .await?;

        let tags = match params.tags {
            Some(ref names) => set_question_tags(&txn, question.id, names).await?,
            None => TagRepository::new(&txn).for_question(question.id).await?,
        };

        txn.commit().await?;

        let answers = self.load_answers(question.id).await?;

        Ok(QuestionDetail {
            question,
            author,
            tags,
            answers,
        })
    }

    /// Deletes a question.
    ///
    /// Allowed for the question's author and for moderators/admins. Tag
    /// usage counters are released before the row delete; answers, votes,
    /// and tag links themselves fall to the foreign-key cascade.
    ///
    /// # Returns
    /// - `Ok(())` - Question deleted
    /// - `Err(AppError::NotFound)` - No question with this ID
    /// - `Err(AppError::AuthErr)` - Actor may not delete this question (403)
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn delete_question(
        &self,
        actor: &entity::user::Model,
        id: i32,
    ) -> Result<(), AppError> {
        let question = QuestionRepository::new(self.db.connection())
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        if question.user_id != actor.id && !can_moderate(actor) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        let txn = self.db.begin().await?;

        // Unlinks every tag and releases its usage_count.
        set_question_tags(&txn, question.id, &[]).await?;
        QuestionRepository::new(&txn).delete(question.id).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn load_detail(
        &self,
        (question, author): (entity::question::Model, Option<entity::user::Model>),
    ) -> Result<QuestionDetail, AppError> {
        let tags = TagRepository::new(self.db.connection())
            .for_question(question.id)
            .await?;
        let answers = self.load_answers(question.id).await?;

        Ok(QuestionDetail {
            question,
            author,
            tags,
            answers,
        })
    }

    async fn load_answers(&self, question_id: i32) -> Result<Vec<AnswerWithAuthor>, AppError> {
        Ok(AnswerRepository::new(self.db.connection())
            .all_by_question(question_id)
            .await?
            .into_iter()
            .map(|(answer, author)| AnswerWithAuthor { answer, author })
            .collect())
    }
}

/// Derives a unique slug for a title, probing with numeric suffixes.
///
/// `exclude_id` ignores the question's own row during updates so an
/// unchanged base does not collide with itself.
async fn assign_slug<C: ConnectionTrait>(
    db: &C,
    title: &str,
    exclude_id: Option<i32>,
) -> Result<String, AppError> {
    let repo = QuestionRepository::new(db);
    let base = generate_slug(title);

    if !repo.slug_exists(&base, exclude_id).await? {
        return Ok(base);
    }

    let mut counter = 1;
    loop {
        let candidate = slug_with_suffix(&base, counter);
        if !repo.slug_exists(&candidate, exclude_id).await? {
            return Ok(candidate);
        }
        counter += 1;
    }
}
