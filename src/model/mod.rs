pub mod answer;
pub mod api;
pub mod auth;
pub mod notification;
pub mod question;
pub mod tag;
pub mod user;
pub mod vote;
