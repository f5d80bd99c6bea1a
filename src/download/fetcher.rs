// src/download/fetcher.rs
// =============================================================================
// This module downloads one archive URL into the destination directory.
//
// Naming:
// An archive URL looks like
//   https://github.com/owner/repo/archive/refs/heads/main.zip
// The repository name is the SECOND path segment (owner is the first), and
// the file lands at <dest>/<repo>.zip. An existing file of that name is
// overwritten without any check; the destination directory is always
// freshly created by the CLI layer, so collisions only happen when two
// archive URLs name the same repository.
//
// Streaming:
// The body is copied chunk by chunk to disk rather than buffered whole;
// repository archives can be arbitrarily large.
//
// Rust concepts:
// - Streams: An async iterator over response body chunks
// - tokio::fs: Async file IO that plays nicely with the runtime
// =============================================================================

use std::path::Path;

use anyhow::{anyhow, bail, Result};
use futures::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use url::Url;

// Derives the repository name from an archive URL
//
// Example:
//   "https://github.com/owner/my-repo/archive/main.zip" -> "my-repo"
//
// Returns an error for URLs that don't parse or that have no second path
// segment, naming the offending URL.
pub fn repo_name_from_archive_url(archive_url: &str) -> Result<String> {
    let parsed = Url::parse(archive_url)
        .map_err(|e| anyhow!("invalid archive URL '{}': {}", archive_url, e))?;

    let name = parsed
        .path_segments()
        .and_then(|mut segments| segments.nth(1))
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| {
            anyhow!(
                "archive URL '{}' has no repository path segment",
                archive_url
            )
        })?;

    Ok(name.to_string())
}

// Downloads an archive URL into the destination directory
//
// Parameters:
//   client: the shared HTTP client
//   archive_url: the direct zip download location
//   dest_dir: the (already created) destination directory
//
// Side effect: creates exactly one file, <dest_dir>/<repo>.zip, whose bytes
// equal the response body. Transport and filesystem failures both propagate
// and abort the run.
pub async fn download_archive(client: &Client, archive_url: &str, dest_dir: &Path) -> Result<()> {
    let repo_name = repo_name_from_archive_url(archive_url)?;

    let response = client.get(archive_url).send().await?;
    if !response.status().is_success() {
        bail!("failed to fetch {}: HTTP {}", archive_url, response.status());
    }

    let dest_path = dest_dir.join(format!("{}.zip", repo_name));
    let mut file = File::create(&dest_path)
        .await
        .map_err(|e| anyhow!("could not create {}: {}", dest_path.display(), e))?;

    // Copy the body to disk one chunk at a time
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
    }

    file.flush().await?;
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is bytes_stream()?
//    - Turns the response body into a Stream of byte chunks
//    - A Stream is the async version of an Iterator
//    - .next().await gives Option<Result<Bytes, _>>: None means the body
//      is finished, an inner Err means the transfer broke mid-way
//
// 2. Why nth(1) on path_segments()?
//    - path_segments() iterates "owner", "repo", "archive", ...
//    - nth(1) skips the owner and takes the repository segment
//
// 3. Why tokio::fs::File instead of std::fs::File?
//    - std file IO would block the async runtime's thread
//    - tokio's version hands the blocking work to a helper thread
//
// 4. Why flush()?
//    - write_all hands bytes to the OS, flush makes sure nothing is
//      still sitting in userspace buffers before we report success
// -----------------------------------------------------------------------------
