// src/scrape/archive.rs
// =============================================================================
// This module finds the "download zip" link on a repository page.
//
// How GitHub marks it up:
// The download anchor inside the "Code" dropdown carries a tracking
// attribute like
//   <a data-hydro-click='{"event_type":"clone_or_download.click",
//                         ...,"git_operation":"DOWNLOAD_ZIP"}'
//      href="/alice/repo/archive/refs/heads/main.zip">
// We don't parse that JSON blob; an anchor counts as the download link when
// its data-hydro-click value contains BOTH marker tokens below. A real page
// has at most one such anchor; if markup ever contained several, the last
// one scanned wins.
//
// Absence is explicit: extract_archive_href returns Option<String>, and
// resolve_archive_url returns Ok(None) for a page with no matching anchor.
// The pipeline turns that None into a hard error naming the repository, so
// a page without a download link fails loudly instead of producing a
// garbage URL downstream.
//
// Rust concepts:
// - Option<T>: "a value or explicitly nothing", instead of sentinel strings
// - Pure functions: extract_archive_href is just markup in, href out
// =============================================================================

use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::fetch::fetch_page;

// Both tokens must appear in the anchor's tracking attribute
const CLICK_MARKER: &str = "clone_or_download.click";
const ZIP_MARKER: &str = "DOWNLOAD_ZIP";

// Resolves a repository page to its archive download URL
//
// Parameters:
//   client: the shared HTTP client
//   site: the site root, prefixed onto the (relative) href
//   repo_url: the repository page to scan
//
// Returns:
//   Ok(Some(url)) - the absolute archive URL
//   Ok(None)      - the page has no matching download anchor
//   Err(...)      - the page fetch itself failed
pub async fn resolve_archive_url(
    client: &Client,
    site: &str,
    repo_url: &str,
) -> Result<Option<String>> {
    let html = fetch_page(client, repo_url).await?;
    Ok(extract_archive_href(&html).map(|href| format!("{}{}", site, href)))
}

// Extracts the download anchor's href from one repository page's markup
//
// Pure function, like its listing counterpart: HTML in, Option<href> out.
// The href is returned as found (GitHub emits it relative); the caller
// absolutizes it.
pub fn extract_archive_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    // Constant selector, known valid, so .unwrap() is fine here
    let selector = Selector::parse("a[data-hydro-click]").unwrap();

    let mut archive_href = None;

    for element in document.select(&selector) {
        let tracking = match element.value().attr("data-hydro-click") {
            Some(value) => value,
            None => continue,
        };

        if !tracking.contains(CLICK_MARKER) || !tracking.contains(ZIP_MARKER) {
            continue;
        }

        if let Some(href) = element.value().attr("href") {
            // Last match wins
            archive_href = Some(href.to_string());
        }
    }

    archive_href
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> instead of an empty string?
//    - "" is a valid-looking value that only blows up later, far from the
//      cause, when something tries to use it as a URL
//    - None forces every caller to decide what absence means
//    - Here the pipeline converts None into an error that names the repo
//
// 2. Why substring checks instead of parsing the JSON attribute?
//    - The attribute is a big tracking payload whose exact shape GitHub
//      can and does change
//    - The two tokens are the stable part we actually depend on
//
// 3. What does .map() on Option do?
//    - Transforms the inner value if there is one, leaves None alone
//    - Some("/x.zip") -> Some("https://github.com/x.zip"), None -> None
// -----------------------------------------------------------------------------
