// tests/e2e.rs
// =============================================================================
// End-to-end tests for the whole pipeline (list -> resolve -> fetch).
//
// Instead of touching github.com, these tests stand up a mockito stub
// server that serves:
// - paginated listing pages with repository anchors
// - repository pages with (or without) the download-zip anchor
// - the archive bytes themselves
//
// The pipeline takes the site root as a parameter, so pointing it at the
// stub server is just a matter of passing server.url(). Destination
// directories come from tempfile so every test is isolated and cleaned up.
// Progress output goes to an injected writer, so the tests collect it in a
// Vec<u8> and assert the printed lines exactly.
// =============================================================================

use std::path::Path;

use mockito::{Matcher, Mock, ServerGuard};

use repo_harvester::fetch::build_client;
use repo_harvester::harvest::harvest_archives;

// Builds one listing-page anchor for a repository
fn repo_anchor(href: &str) -> String {
    format!(r#"<a itemprop="name codeRepository" href="{}">repo</a>"#, href)
}

// Builds a listing page containing the given repository anchors
fn listing_page(anchors: &[&str]) -> String {
    let body: String = anchors.iter().map(|href| repo_anchor(href)).collect();
    format!("<html><body>{}</body></html>", body)
}

// Builds a repository page whose download anchor points at `archive_href`
fn repo_page(archive_href: &str) -> String {
    format!(
        concat!(
            "<html><body>",
            r#"<a data-hydro-click='{{"event_type":"clone_or_download.click","git_operation":"DOWNLOAD_ZIP"}}' href="{}">Download ZIP</a>"#,
            "</body></html>"
        ),
        archive_href
    )
}

// Mounts a listing-page mock for ?page=<n>&tab=repositories
async fn mock_listing_page(server: &mut ServerGuard, user: &str, page: u32, body: &str) -> Mock {
    server
        .mock("GET", format!("/{}", user).as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), page.to_string()),
            Matcher::UrlEncoded("tab".into(), "repositories".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .expect(1)
        .create_async()
        .await
}

// Mounts a plain HTML page mock at `path`
async fn mock_html_page(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create_async()
        .await
}

// Mounts an archive byte-body mock at `path`
async fn mock_archive(server: &mut ServerGuard, path: &str, bytes: &[u8]) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/zip")
        .with_body(bytes)
        .create_async()
        .await
}

#[tokio::test]
async fn downloads_every_archive_for_a_user() {
    let mut server = mockito::Server::new_async().await;
    let site = server.url();

    // Three repositories spread over two listing pages (2 + 1), followed
    // by an empty page that terminates the scan
    let page1 = mock_listing_page(
        &mut server,
        "alice",
        1,
        &listing_page(&["/alice/one", "/alice/two"]),
    )
    .await;
    let page2 = mock_listing_page(&mut server, "alice", 2, &listing_page(&["/alice/three"])).await;
    let page3 = mock_listing_page(&mut server, "alice", 3, &listing_page(&[])).await;

    // Each repository page carries its download anchor
    mock_html_page(
        &mut server,
        "/alice/one",
        &repo_page("/alice/one/archive/refs/heads/main.zip"),
    )
    .await;
    mock_html_page(
        &mut server,
        "/alice/two",
        &repo_page("/alice/two/archive/refs/heads/main.zip"),
    )
    .await;
    mock_html_page(
        &mut server,
        "/alice/three",
        &repo_page("/alice/three/archive/refs/heads/main.zip"),
    )
    .await;

    // And the archive bytes themselves
    mock_archive(&mut server, "/alice/one/archive/refs/heads/main.zip", b"zip-one").await;
    mock_archive(&mut server, "/alice/two/archive/refs/heads/main.zip", b"zip-two").await;
    mock_archive(
        &mut server,
        "/alice/three/archive/refs/heads/main.zip",
        b"zip-three",
    )
    .await;

    let tmp = tempfile::tempdir().unwrap();
    let dest = tmp.path().join("archives");
    std::fs::create_dir(&dest).unwrap();

    let client = build_client().unwrap();
    let mut out = Vec::new();
    let count = harvest_archives(&client, &site, "alice", &dest, &mut out)
        .await
        .unwrap();

    assert_eq!(count, 3);
    assert_file_bytes(&dest.join("one.zip"), b"zip-one");
    assert_file_bytes(&dest.join("two.zip"), b"zip-two");
    assert_file_bytes(&dest.join("three.zip"), b"zip-three");

    // The progress lines arrive in order: the scan, the count, one
    // "downloading ... (N/total)" per repository, then the completion line
    let output = String::from_utf8(out).unwrap();
    let expected = format!(
        "getting all repos...\n\
         found 3 repos\n\
         downloading {0}/alice/one/archive/refs/heads/main.zip... (1/3)\n\
         downloading {0}/alice/two/archive/refs/heads/main.zip... (2/3)\n\
         downloading {0}/alice/three/archive/refs/heads/main.zip... (3/3)\n\
         done\n",
        site
    );
    assert_eq!(output, expected);

    // Exactly three listing fetches: two full pages plus the empty one
    page1.assert_async().await;
    page2.assert_async().await;
    page3.assert_async().await;
}

#[tokio::test]
async fn user_with_no_repositories_fetches_one_page() {
    let mut server = mockito::Server::new_async().await;
    let site = server.url();

    let page1 = mock_listing_page(&mut server, "nobody", 1, &listing_page(&[])).await;

    let tmp = tempfile::tempdir().unwrap();
    let client = build_client().unwrap();
    let mut out = Vec::new();
    let count = harvest_archives(&client, &site, "nobody", tmp.path(), &mut out)
        .await
        .unwrap();

    assert_eq!(count, 0);
    page1.assert_async().await;
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, "getting all repos...\nfound 0 repos\ndone\n");
}

#[tokio::test]
async fn repository_without_download_link_fails_loudly() {
    let mut server = mockito::Server::new_async().await;
    let site = server.url();

    mock_listing_page(&mut server, "alice", 1, &listing_page(&["/alice/broken"])).await;
    mock_listing_page(&mut server, "alice", 2, &listing_page(&[])).await;

    // Repository page with no download anchor at all
    mock_html_page(
        &mut server,
        "/alice/broken",
        "<html><body>nothing to see</body></html>",
    )
    .await;

    let tmp = tempfile::tempdir().unwrap();
    let client = build_client().unwrap();
    let result =
        harvest_archives(&client, &site, "alice", tmp.path(), &mut std::io::sink()).await;

    // The run aborts with an error naming the repository page; it never
    // silently skips the repository
    let err = result.unwrap_err().to_string();
    assert!(err.contains("/alice/broken"), "unexpected error: {}", err);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn listing_page_failure_aborts_the_run() {
    let mut server = mockito::Server::new_async().await;
    let site = server.url();

    server
        .mock("GET", "/alice")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let tmp = tempfile::tempdir().unwrap();
    let client = build_client().unwrap();
    let result =
        harvest_archives(&client, &site, "alice", tmp.path(), &mut std::io::sink()).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("HTTP 500"), "unexpected error: {}", err);
}

// Reads a file and asserts its exact byte contents
fn assert_file_bytes(path: &Path, expected: &[u8]) {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("could not read {}: {}", path.display(), e));
    assert_eq!(bytes, expected, "wrong contents for {}", path.display());
}
