// src/harvest.rs
// =============================================================================
// This module is the pipeline: list -> resolve -> fetch.
//
// What happens here:
// 1. The listing scanner produces every repository URL the user owns
// 2. For each repository, strictly in discovery order:
//    a. resolve the page's download-zip link
//    b. stream that archive into the destination directory
//
// Everything is sequential: one request in flight at a time, each step
// awaited to completion before the next begins. No state is shared between
// loop iterations; each repository URL lives for exactly one pass.
//
// Failure model: there is no recovery anywhere. The first transport error,
// missing download link, or filesystem error propagates out and aborts the
// whole run. Archives already written stay on disk, but no summary or
// resumption marker exists.
//
// Rust concepts:
// - async/await: Each network step suspends until its response arrives
// - enumerate(): Pairs each item with its index for progress reporting
// =============================================================================

use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Result};
use reqwest::Client;

use crate::download::download_archive;
use crate::scrape::{list_repositories, resolve_archive_url};

// The canonical site root. Scraping and pipeline functions take the root as
// a parameter so tests can point them at a stub server; production callers
// pass this constant.
pub const GITHUB_URL: &str = "https://github.com";

// Runs the whole pipeline for one user
//
// Parameters:
//   client: the shared HTTP client
//   site: the site root (GITHUB_URL in production)
//   username: the profile to harvest
//   dest_dir: the already-created destination directory
//   out: where progress lines go (stdout in production; tests pass a
//        Vec<u8> so they can assert the exact output)
//
// Returns: the number of repositories downloaded
//
// Progress is written as we go: the repository count once the listing scan
// finishes, one "downloading <url>... (N/total)" line per repository, and
// a final "done" once every archive is on disk.
pub async fn harvest_archives(
    client: &Client,
    site: &str,
    username: &str,
    dest_dir: &Path,
    out: &mut impl Write,
) -> Result<usize> {
    writeln!(out, "getting all repos...")?;
    let repo_urls = list_repositories(client, site, username).await?;

    let repo_count = repo_urls.len();
    writeln!(out, "found {} repos", repo_count)?;

    for (repo_num, repo_url) in repo_urls.iter().enumerate() {
        // A repository page without a download anchor aborts the run with
        // an error naming the page, rather than skipping it silently.
        let archive_url = resolve_archive_url(client, site, repo_url)
            .await?
            .ok_or_else(|| anyhow!("no download-zip link found on {}", repo_url))?;

        writeln!(
            out,
            "downloading {}... ({}/{})",
            archive_url,
            repo_num + 1,
            repo_count
        )?;
        download_archive(client, &archive_url, dest_dir).await?;
    }

    writeln!(out, "done")?;
    Ok(repo_count)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why sequential instead of concurrent downloads?
//    - The tool makes many requests against one site as an anonymous
//      client; one at a time is the polite (and simple) choice
//    - Sequential also means progress lines arrive in a stable order
//
// 2. What does ok_or_else() do?
//    - Converts Option<T> into Result<T, E>
//    - Some(v) -> Ok(v), None -> Err(the error the closure builds)
//    - This is where "the page had no download link" becomes a real error
//
// 3. Why does the function return the count?
//    - The caller (main.rs, tests) can report or assert on it without
//      re-deriving it from the filesystem
//
// 4. Why take a Write impl instead of calling println!?
//    - println! is welded to the process stdout, which tests can't read
//    - With `out` injected, main passes io::stdout() and the tests pass
//      a Vec<u8>, then assert the progress lines byte for byte
// -----------------------------------------------------------------------------
