// src/scrape/mod.rs
// =============================================================================
// This module contains all markup scanning logic.
//
// Submodules:
// - listing: Finds repository URLs on a profile's paginated listing pages
// - archive: Finds the "download zip" link on a repository page
//
// Both submodules follow the same pattern: a PURE function that takes raw
// HTML and returns the matches (easy to unit test, no hidden state), plus
// an async wrapper that fetches the page first.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod archive;
mod listing;

// Re-export public items from submodules
// This lets users write `scrape::list_repositories()` instead of
// `scrape::listing::list_repositories()`
pub use archive::{extract_archive_href, resolve_archive_url};
pub use listing::{extract_repo_urls, list_repositories, normalize_repo_url};
