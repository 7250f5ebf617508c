//! Answer service for business logic.
//!
//! This module owns answer lifecycle rules: creation with the parent
//! question's answer_count bump and the new-answer notification, ownership
//! checks on edits and deletes, the deletion bookkeeping on the parent
//! question, and the accepted-answer state machine. Acceptance keeps the
//! two sides of the invariant in step inside one transaction: at most one
//! answer per question carries is_accepted and it always matches the
//! question's accepted_answer_id.

use crate::server::{
    data::{
        answer::AnswerRepository, notification::NotificationRepository,
        question::QuestionRepository,
    },
    db::Db,
    error::{auth::AuthError, AppError},
    model::{
        answer::{AnswerSort, AnswerWithAuthor, CreateAnswerParams, PaginatedAnswers},
        notification::{excerpt, CreateNotificationParams, TYPE_ACCEPT, TYPE_ANSWER},
        question::STATUS_ACTIVE,
        user::can_moderate,
    },
    util::validate::Validator,
};

/// Service providing business logic for answers.
pub struct AnswerService<'a> {
    pub db: &'a Db,
}

impl<'a> AnswerService<'a> {
    /// Creates a new AnswerService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database handle
    ///
    /// # Returns
    /// - `AnswerService` - New service instance
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Posts a new answer to a question.
    ///
    /// The answer insert, the question's answer_count bump, and the
    /// notification to the question author run in one transaction. Authors
    /// answering their own question get no notification.
    ///
    /// # Returns
    /// - `Ok(AnswerWithAuthor)` - The created answer with its author
    /// - `Err(AppError::Validation)` - Content out of bounds
    /// - `Err(AppError::NotFound)` - Question does not exist
    /// - `Err(AppError::BadRequest)` - Question no longer accepts answers
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn create_answer(
        &self,
        author: &entity::user::Model,
        params: CreateAnswerParams,
    ) -> Result<AnswerWithAuthor, AppError> {
        let mut validator = Validator::new();
        validator.answer_content(&params.content);
        validator.finish()?;

        let question = QuestionRepository::new(self.db.connection())
            .find_by_id(params.question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        if question.status != STATUS_ACTIVE {
            return Err(AppError::BadRequest(
                "This question is no longer accepting answers".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let answer = AnswerRepository::new(&txn).create(params).await?;
        QuestionRepository::new(&txn)
            .adjust_answer_count(question.id, 1)
            .await?;

        if question.user_id != author.id {
            NotificationRepository::new(&txn)
                .create(CreateNotificationParams {
                    user_id: question.user_id,
                    kind: TYPE_ANSWER,
                    title: "New answer to your question".to_string(),
                    message: format!(
                        "{} answered your question: \"{}\"",
                        author.username,
                        excerpt(&question.title)
                    ),
                    reference_type: Some("question".to_string()),
                    reference_id: Some(question.id),
                })
                .await?;
        }

        txn.commit().await?;

        Ok(AnswerWithAuthor {
            answer,
            author: Some(author.clone()),
        })
    }

    /// Gets one answer with its author.
    ///
    /// # Returns
    /// - `Ok(AnswerWithAuthor)` - The answer
    /// - `Err(AppError::NotFound)` - No answer with this ID
    /// - `Err(AppError)` - Database error
    pub async fn get_answer(&self, id: i32) -> Result<AnswerWithAuthor, AppError> {
        let (answer, author) = AnswerRepository::new(self.db.connection())
            .find_by_id_with_author(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

        Ok(AnswerWithAuthor { answer, author })
    }

    /// Gets a page of one question's answers.
    ///
    /// # Returns
    /// - `Ok(PaginatedAnswers)` - Answers with pagination metadata
    /// - `Err(AppError::NotFound)` - Question does not exist
    /// - `Err(AppError)` - Database error
    pub async fn list_by_question(
        &self,
        question_id: i32,
        page: u64,
        per_page: u64,
        sort: AnswerSort,
    ) -> Result<PaginatedAnswers, AppError> {
        QuestionRepository::new(self.db.connection())
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        let (rows, totals) = AnswerRepository::new(self.db.connection())
            .list_by_question(question_id, page - 1, per_page, sort)
            .await?;

        Ok(paginated(rows, totals, page, per_page))
    }

    /// Gets a page of one author's answers, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedAnswers)` - Answers with pagination metadata
    /// - `Err(AppError)` - Database error
    pub async fn list_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedAnswers, AppError> {
        let (rows, totals) = AnswerRepository::new(self.db.connection())
            .list_by_user(user_id, page - 1, per_page)
            .await?;

        Ok(paginated(rows, totals, page, per_page))
    }

    /// Replaces an answer's content.
    ///
    /// Allowed for the answer's author and for moderators/admins.
    ///
    /// # Returns
    /// - `Ok(AnswerWithAuthor)` - The updated answer
    /// - `Err(AppError::Validation)` - Content out of bounds
    /// - `Err(AppError::NotFound)` - No answer with this ID
    /// - `Err(AppError::AuthErr)` - Actor may not edit this answer (403)
    /// - `Err(AppError)` - Database error
    pub async fn update_answer(
        &self,
        actor: &entity::user::Model,
        id: i32,
        content: String,
    ) -> Result<AnswerWithAuthor, AppError> {
        let mut validator = Validator::new();
        validator.answer_content(&content);
        validator.finish()?;

        let repo = AnswerRepository::new(self.db.connection());
        let (answer, author) = repo
            .find_by_id_with_author(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

        if answer.user_id != actor.id && !can_moderate(actor) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        let answer = repo.update_content(id, content).await?;

        Ok(AnswerWithAuthor { answer, author })
    }

    /// Deletes an answer and repairs the parent question's bookkeeping.
    ///
    /// Allowed for the answer's author and for moderators/admins. The row
    /// delete, the answer_count decrement, and (when the deleted answer was
    /// the accepted one) clearing the question's accepted_answer_id run in
    /// one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Answer deleted
    /// - `Err(AppError::NotFound)` - No answer with this ID
    /// - `Err(AppError::AuthErr)` - Actor may not delete this answer (403)
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn delete_answer(
        &self,
        actor: &entity::user::Model,
        id: i32,
    ) -> Result<(), AppError> {
        let answer = AnswerRepository::new(self.db.connection())
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

        if answer.user_id != actor.id && !can_moderate(actor) {
            return Err(AuthError::InsufficientPermissions.into());
        }

        let txn = self.db.begin().await?;

        AnswerRepository::new(&txn).delete(answer.id).await?;

        let question_repo = QuestionRepository::new(&txn);
        question_repo
            .adjust_answer_count(answer.question_id, -1)
            .await?;
        if answer.is_accepted {
            question_repo
                .set_accepted_answer(answer.question_id, None)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Marks an answer as the accepted answer of its question.
    ///
    /// Only the question's author may accept. Any previously accepted answer
    /// of the question is un-accepted first, and the question's
    /// accepted_answer_id is mirrored in the same transaction. The answer's
    /// author is notified unless they own the question.
    ///
    /// # Returns
    /// - `Ok(AnswerWithAuthor)` - The accepted answer
    /// - `Err(AppError::NotFound)` - Answer or its question does not exist
    /// - `Err(AppError::AuthErr)` - Actor does not own the question (403)
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn accept_answer(
        &self,
        actor: &entity::user::Model,
        answer_id: i32,
    ) -> Result<AnswerWithAuthor, AppError> {
        let (answer, author) = AnswerRepository::new(self.db.connection())
            .find_by_id_with_author(answer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

        let question = QuestionRepository::new(self.db.connection())
            .find_by_id(answer.question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        if question.user_id != actor.id {
            return Err(AuthError::InsufficientPermissions.into());
        }

        let txn = self.db.begin().await?;

        let answer_repo = AnswerRepository::new(&txn);
        answer_repo.clear_accepted_for_question(question.id).await?;
        let answer = answer_repo.set_accepted(answer_id, true).await?;
        QuestionRepository::new(&txn)
            .set_accepted_answer(question.id, Some(answer_id))
            .await?;

        if answer.user_id != question.user_id {
            NotificationRepository::new(&txn)
                .create(CreateNotificationParams {
                    user_id: answer.user_id,
                    kind: TYPE_ACCEPT,
                    title: "Your answer was accepted".to_string(),
                    message: format!(
                        "{} accepted your answer to: \"{}\"",
                        actor.username,
                        excerpt(&question.title)
                    ),
                    reference_type: Some("answer".to_string()),
                    reference_id: Some(answer.id),
                })
                .await?;
        }

        txn.commit().await?;

        Ok(AnswerWithAuthor { answer, author })
    }

    /// Marks an answer accepted, addressed through its question.
    ///
    /// Same as `accept_answer`, with an extra check that the answer actually
    /// belongs to the given question.
    ///
    /// # Returns
    /// - `Ok(AnswerWithAuthor)` - The accepted answer
    /// - `Err(AppError::BadRequest)` - Answer belongs to another question
    /// - `Err(AppError)` - As `accept_answer`
    pub async fn accept_for_question(
        &self,
        actor: &entity::user::Model,
        question_id: i32,
        answer_id: i32,
    ) -> Result<AnswerWithAuthor, AppError> {
        let answer = AnswerRepository::new(self.db.connection())
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

        if answer.question_id != question_id {
            return Err(AppError::BadRequest(
                "Answer does not belong to this question".to_string(),
            ));
        }

        self.accept_answer(actor, answer_id).await
    }

    /// Clears an answer's accepted mark through the answer ID.
    ///
    /// # Returns
    /// - `Ok(())` - Acceptance cleared
    /// - `Err(AppError::NotFound)` - Answer does not exist
    /// - `Err(AppError::AuthErr)` - Actor does not own the question (403)
    /// - `Err(AppError::BadRequest)` - Answer is not accepted
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn unaccept_answer(
        &self,
        actor: &entity::user::Model,
        answer_id: i32,
    ) -> Result<(), AppError> {
        let answer = AnswerRepository::new(self.db.connection())
            .find_by_id(answer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Answer not found".to_string()))?;

        if !answer.is_accepted {
            return Err(AppError::BadRequest(
                "Answer is not currently accepted".to_string(),
            ));
        }

        self.unaccept_for_question(actor, answer.question_id).await
    }

    /// Clears the accepted answer of a question, both sides at once.
    ///
    /// # Returns
    /// - `Ok(())` - Acceptance cleared (no-op when nothing was accepted)
    /// - `Err(AppError::NotFound)` - Question does not exist
    /// - `Err(AppError::AuthErr)` - Actor does not own the question (403)
    /// - `Err(AppError)` - Database error, transaction rolled back
    pub async fn unaccept_for_question(
        &self,
        actor: &entity::user::Model,
        question_id: i32,
    ) -> Result<(), AppError> {
        let question = QuestionRepository::new(self.db.connection())
            .find_by_id(question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        if question.user_id != actor.id {
            return Err(AuthError::InsufficientPermissions.into());
        }

        let txn = self.db.begin().await?;

        AnswerRepository::new(&txn)
            .clear_accepted_for_question(question.id)
            .await?;
        QuestionRepository::new(&txn)
            .set_accepted_answer(question.id, None)
            .await?;

        txn.commit().await?;

        Ok(())
    }
}

fn paginated(
    rows: Vec<(entity::answer::Model, Option<entity::user::Model>)>,
    totals: sea_orm::ItemsAndPagesNumber,
    page: u64,
    per_page: u64,
) -> PaginatedAnswers {
    PaginatedAnswers {
        answers: rows
            .into_iter()
            .map(|(answer, author)| AnswerWithAuthor { answer, author })
            .collect(),
        total: totals.number_of_items,
        page,
        per_page,
        total_pages: totals.number_of_pages,
    }
}
