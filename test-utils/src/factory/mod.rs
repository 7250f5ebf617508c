//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let question = factory::question::create_question(&db, user.id).await?;
//!
//!     // Create a question together with its author
//!     let (author, question) = factory::helpers::create_question_with_author(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("alice")
//!     .role("moderator")
//!     .reputation(500)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user account entities
//! - `question` - Create question entities
//! - `answer` - Create answer entities
//! - `tag` - Create tag entities
//! - `vote` - Create vote entities
//! - `notification` - Create notification entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod answer;
pub mod helpers;
pub mod notification;
pub mod question;
pub mod tag;
pub mod user;
pub mod vote;

// Re-export commonly used factory functions for concise usage
pub use answer::create_answer;
pub use notification::create_notification;
pub use question::create_question;
pub use tag::create_tag;
pub use user::create_user;
pub use vote::create_vote;
