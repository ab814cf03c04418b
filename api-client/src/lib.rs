// API client library for the slide editor
//
// This crate provides the HTTP client the browser frontend uses to
// load, save and remove slides on the signage server.

pub mod errors;
pub mod http_client;

// Re-export commonly used items
pub use errors::ApiError;
pub use http_client::{get_api_base_url, SlideApiClient};
