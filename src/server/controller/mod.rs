//! HTTP request handlers.
//!
//! Controllers are thin: extract and clamp request input, run the auth guard
//! where the endpoint needs it, call the service, and shape the response into
//! the `ApiResponse` envelope. Business rules live in `service/`, never here.

use serde::Deserialize;

pub mod answer;
pub mod auth;
pub mod health;
pub mod notification;
pub mod question;
pub mod tag;
pub mod vote;

/// Hard ceiling on `per_page` across every list endpoint.
pub const MAX_PER_PAGE: u64 = 50;
/// Page size used when the query string does not specify one.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// Pagination query parameters shared by the list endpoints.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    DEFAULT_PER_PAGE
}

impl PaginationParams {
    /// Clamps the raw query values to page >= 1 and per_page in 1..=50.
    pub fn clamp(&self) -> (u64, u64) {
        let page = self.page.max(1);
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        (page, per_page)
    }
}

#[cfg(test)]
mod test;
