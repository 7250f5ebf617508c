//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories work directly with SeaORM entity models and
//! return them to the service layer, which owns DTO conversion. Every repository is
//! generic over the connection so the same queries run on a pooled connection or inside
//! a transaction handle.

pub mod answer;
pub mod notification;
pub mod question;
pub mod tag;
pub mod user;
pub mod vote;

#[cfg(test)]
mod test;
