pub use super::answer::Entity as Answer;
pub use super::notification::Entity as Notification;
pub use super::question::Entity as Question;
pub use super::question_tag::Entity as QuestionTag;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
pub use super::vote::Entity as Vote;
