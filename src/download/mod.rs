// src/download/mod.rs
// =============================================================================
// This module writes archive URLs to local .zip files.
//
// Submodule:
// - fetcher: derives the destination file name and streams the bytes down
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod fetcher;

// Re-export the download primitives
pub use fetcher::{download_archive, repo_name_from_archive_url};
