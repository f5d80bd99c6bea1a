// src/scrape/listing.rs
// =============================================================================
// This module finds repository URLs on a user's profile listing pages.
//
// How GitHub marks them up:
// Every repository on a profile's "Repositories" tab is an anchor like
//   <a itemprop="name codeRepository" href="/alice/some-repo">...</a>
// The itemprop value is the machine-readable marker we match on. It has to
// equal "name codeRepository" EXACTLY; other itemprop values on the page
// (avatars, org links, ...) must not match.
//
// Pagination:
// The listing is paginated (?page=N&tab=repositories). We walk pages in
// increasing order and stop at the first page that yields zero repository
// anchors. A page can be empty either because the user ran out of
// repositories or because pagination is exhausted; we can't tell these
// apart and treat both as "we're done".
//
// Rust concepts:
// - Iterators: For processing collections
// - Pure functions: extract_repo_urls has no state beyond its inputs
// =============================================================================

use anyhow::Result;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::fetch::fetch_page;

// The exact itemprop value GitHub puts on repository anchors
const REPO_ANCHOR_MARKER: &str = "name codeRepository";

// Lists every repository URL owned by a user, in discovery order
//
// Parameters:
//   client: the shared HTTP client
//   site: the site root (https://github.com in production, a stub in tests)
//   username: the profile to scan
//
// Returns: all repository page URLs, absolute, in the order found
//
// A user with zero repositories yields Ok(vec![]) after exactly one page
// fetch. Any transport failure propagates up and aborts the run.
pub async fn list_repositories(
    client: &Client,
    site: &str,
    username: &str,
) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    let mut page_num: u32 = 1;

    loop {
        let page_url = format!("{}/{}?page={}&tab=repositories", site, username, page_num);
        let html = fetch_page(client, &page_url).await?;

        let found = extract_repo_urls(&html, site);
        if found.is_empty() {
            // Either past the last page, or the user has no repositories
            // at all. Both mean: stop here.
            break;
        }

        urls.extend(found);
        page_num += 1;
    }

    Ok(urls)
}

// Extracts every repository URL from one listing page's markup
//
// This is a pure function: HTML in, URLs out, nothing else. That keeps it
// trivial to unit test with literal HTML fixtures.
//
// Parameters:
//   html: one listing page's markup
//   site: the site root, used to absolutize relative hrefs
//
// Returns: Vec<String> of absolute repository URLs in document order
pub fn extract_repo_urls(html: &str, site: &str) -> Vec<String> {
    let mut urls = Vec::new();

    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[itemprop]").unwrap();

    for element in document.select(&selector) {
        // The itemprop value must match the marker exactly
        if element.value().attr("itemprop") != Some(REPO_ANCHOR_MARKER) {
            continue;
        }

        if let Some(href) = element.value().attr("href") {
            urls.push(normalize_repo_url(site, href));
        }
    }

    urls
}

// Makes a scraped href absolute
//
// GitHub's listing anchors carry hrefs like "/alice/some-repo". If the href
// does not already mention the site's host, we prefix it with the site
// root. Applying this twice yields the same result as applying it once
// (the second pass sees the host and leaves the URL alone).
//
// Examples (site = "https://github.com"):
//   "/alice/repo" -> "https://github.com/alice/repo"
//   "https://github.com/alice/repo" -> unchanged
pub fn normalize_repo_url(site: &str, href: &str) -> String {
    let host = Url::parse(site)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string));

    match host {
        Some(host) if href.contains(&host) => href.to_string(),
        _ => format!("{}{}", site, href),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a pure extraction function?
//    - Parsers that accumulate matches in mutable fields are hard to test
//    - A function from &str to Vec<String> needs no setup and no teardown
//    - The async pagination loop stays thin and obviously correct
//
// 2. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - "a[itemprop]" means "all <a> tags that have an itemprop attribute"
//
// 3. Why compare attr() against Some(...)?
//    - .attr() returns Option<&str> (the attribute may be missing)
//    - Comparing against Some(REPO_ANCHOR_MARKER) handles "missing" and
//      "present but different" in one expression
//
// 4. What is loop/break?
//    - loop {} runs forever until a break
//    - We can't use a for loop because we don't know the page count
//      up front; the break condition comes from the page contents
// -----------------------------------------------------------------------------
