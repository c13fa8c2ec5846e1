//! Integration tests for CustomKeeps.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations + seed
//! cargo run -p customkeeps-cli -- migrate
//! cargo run -p customkeeps-cli -- seed
//!
//! # Start the API
//! cargo run -p customkeeps-api
//!
//! # Run integration tests (they are #[ignore]d by default)
//! cargo test -p customkeeps-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_catalog` - Product listing and lookup
//! - `api_pricing` - Quote endpoint behavior
//! - `api_checkout` - Checkout against Stripe sandbox tokens

use reqwest::Client;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client for test requests.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .build()
        .expect("Failed to create HTTP client")
}
