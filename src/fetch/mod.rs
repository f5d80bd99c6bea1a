// src/fetch/mod.rs
// =============================================================================
// This module is our HTTP transport.
//
// Everything network-related that isn't specific to scraping or downloading
// lives here:
// - Building the one shared reqwest client
// - Fetching a page of HTML as text
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod http;

// Re-export the transport primitives
// This lets users write `fetch::fetch_page()` instead of
// `fetch::http::fetch_page()`
pub use http::{build_client, fetch_page};
