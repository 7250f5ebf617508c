pub mod prelude;

pub mod answer;
pub mod notification;
pub mod question;
pub mod question_tag;
pub mod tag;
pub mod user;
pub mod vote;
