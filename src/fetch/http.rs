// src/fetch/http.rs
// =============================================================================
// This module makes the actual HTTP requests.
//
// Key functionality:
// - build_client(): one reqwest Client shared by the whole run
// - fetch_page(): GET a URL and return its body as decoded text
//
// Design decisions:
// - No timeout is configured on the client. The pipeline is strictly
//   sequential and has no cancellation story, so an unresponsive server
//   simply stalls the run (bounded only by whatever the OS/transport does
//   by default). Adding a timeout here would silently turn "slow server"
//   into "aborted run", which is not behavior this tool promises.
// - Any non-2xx response is an error. There is no retry and no recovery
//   anywhere in the pipeline, so a failed fetch aborts the whole run.
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling
// =============================================================================

use anyhow::{bail, Result};
use reqwest::Client;

// Builds the HTTP client used for every request in a run
//
// The client is cheap to pass around by reference and reuses connections
// internally (connection pooling), so we build exactly one per run.
pub fn build_client() -> Result<Client> {
    let client = Client::builder().build()?;
    Ok(client)
}

// Fetches a URL and returns the response body as text
//
// Parameters:
//   client: the shared reqwest client
//   url: the URL to fetch
//
// Returns: the decoded body, or an error naming the URL
//
// reqwest's .text() decodes the body using the charset declared in the
// response's Content-Type header (falling back to UTF-8), which is exactly
// the decoding behavior we want for scraped HTML.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        bail!("failed to fetch {}: HTTP {}", url, response.status());
    }

    let body = response.text().await?;
    Ok(body)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is bail!?
//    - An anyhow macro: shorthand for `return Err(anyhow!(...))`
//    - Handy for early-exit error paths with a formatted message
//
// 2. What is the ? operator?
//    - Shorthand for error propagation
//    - If Result is Ok(value), extracts value
//    - If Result is Err(e), returns early with the error
//
// 3. Why does fetch_page take &Client?
//    - We only need to read from the client, not own it
//    - Borrowing lets every call in the run share one client
//
// 4. Why check .status() ourselves?
//    - reqwest does NOT treat 404/500 as errors by default
//    - send() only fails on transport problems (DNS, connect, TLS, ...)
//    - We promote non-2xx responses to errors because this pipeline has
//      no use for an error page's HTML
// -----------------------------------------------------------------------------
