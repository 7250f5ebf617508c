//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Entity models cross the repository
//! boundary unchanged and are converted to DTOs at the controller boundary through
//! the helpers defined here. Parameter types keep service signatures explicit without
//! leaking HTTP request shapes into business logic.

pub mod answer;
pub mod notification;
pub mod question;
pub mod tag;
pub mod user;
pub mod vote;
