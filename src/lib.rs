// src/lib.rs
// =============================================================================
// This is the library root of repo-harvester.
//
// The actual binary (src/main.rs) is a thin shell around this library:
// it parses arguments, prepares the destination directory, and calls into
// harvest::harvest_archives(). Keeping the logic in a library crate means
// the integration tests in tests/ can drive the whole pipeline against a
// stub HTTP server.
//
// Module map:
// - cli:      command-line argument definitions (clap)
// - fetch:    the HTTP transport (shared client, fetch-a-page primitive)
// - scrape:   markup scanning (repository listing pages, archive links)
// - download: streaming an archive URL's bytes to a local .zip file
// - harvest:  the list -> resolve -> fetch pipeline tying it all together
//
// Rust concepts:
// - pub mod: Exposes a module to users of the library (including tests)
// - Library vs binary crate: One package can contain both
// =============================================================================

pub mod cli;
pub mod download;
pub mod fetch;
pub mod harvest;
pub mod scrape;
