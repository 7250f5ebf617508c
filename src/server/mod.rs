//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication and role guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB handle, cache, JWT codec)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration, rate limiting, and API documentation
//! - **Cache** (`cache`) - TTL response cache for hot list endpoints
//! - **Token** (`token`) - JWT issuing and verification
//! - **Util** (`util`) - Slug generation and input validation helpers
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** authenticates the caller and checks role requirements
//! 3. **Controller** validates access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Service** returns domain model to controller
//! 7. **Controller** converts domain model to DTO, returns HTTP response

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod db;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod token;
pub mod util;
