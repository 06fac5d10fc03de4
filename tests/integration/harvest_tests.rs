//! Integration tests for the harvester
//!
//! These tests use wiremock to serve a page and its images and run the full
//! fetch, extract, download and CSV cycle end-to-end.

use image_harvester::config::{Config, OutputConfig};
use image_harvester::crawler::{HarvestPhase, Harvester};
use image_harvester::{run_harvest, HarvestError, ImageRecord};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "https://www.airbnb.com/";

/// Creates a test configuration scraping `page_url` into `directory`
fn create_test_config(page_url: String, directory: &Path) -> Config {
    Config {
        fetch_url: page_url,
        target_prefix: PREFIX.to_string(),
        output: OutputConfig {
            directory: directory.to_path_buf(),
            csv_file_name: "image_urls.csv".to_string(),
        },
        ..Config::default()
    }
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_image(server: &MockServer, route: &str, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(bytes.to_vec())
                .insert_header("content-type", "image/jpeg"),
        )
        .mount(server)
        .await;
}

fn read_csv(directory: &Path) -> String {
    std::fs::read_to_string(directory.join("image_urls.csv")).expect("CSV file should exist")
}

#[tokio::test]
async fn test_three_anchor_scenario() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        format!(
            r#"<html><body>
            <a href="https://example.org/">Start</a>
            <a href="https://www.airbnb.com/rooms/1"><img src="{base}/a.jpg"></a>
            <a href="https://example.org/other"><img src="{base}/b.jpg"></a>
            </body></html>"#
        ),
    )
    .await;
    mount_image(&server, "/a.jpg", b"image-a").await;
    mount_image(&server, "/b.jpg", b"image-b").await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    let report = run_harvest(create_test_config(format!("{}/", base), &dir))
        .await
        .expect("Harvest should succeed");

    assert_eq!(report.anchors_scanned, 3);
    assert_eq!(report.queued, 2);
    assert_eq!(report.downloaded, 2);
    assert!(report.is_complete());
    assert_eq!(
        report.records,
        vec![
            ImageRecord::new(format!("{}/a.jpg", base)),
            ImageRecord::new(format!("{}/b.jpg", base)),
        ]
    );

    assert!(!dir.join("0.jpg").exists());
    assert_eq!(std::fs::read(dir.join("1.jpg")).unwrap(), b"image-a");
    assert_eq!(std::fs::read(dir.join("2.jpg")).unwrap(), b"image-b");

    assert_eq!(
        read_csv(&dir),
        format!("Image URL\n{base}/a.jpg\n{base}/b.jpg\n")
    );
}

#[tokio::test]
async fn test_gate_anchor_without_image() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        format!(
            r#"<html><body>
            <a href="https://www.airbnb.com/">Gate, no image</a>
            <a href="/elsewhere"><img src="{base}/c.jpg"></a>
            </body></html>"#
        ),
    )
    .await;
    mount_image(&server, "/c.jpg", b"image-c").await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    let report = run_harvest(create_test_config(format!("{}/", base), &dir))
        .await
        .unwrap();

    assert_eq!(report.queued, 1);
    assert!(!dir.join("0.jpg").exists());
    assert!(dir.join("1.jpg").exists());
    assert_eq!(read_csv(&dir), format!("Image URL\n{base}/c.jpg\n"));
}

#[tokio::test]
async fn test_fetch_failure_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    let mut harvester =
        Harvester::new(create_test_config(format!("{}/", server.uri()), &dir)).unwrap();
    let result = harvester.run().await;

    assert!(matches!(
        result,
        Err(HarvestError::HttpStatus { status: 500, .. })
    ));
    assert_eq!(harvester.phase(), HarvestPhase::Error);
    assert!(!dir.exists(), "No output directory should be created");
}

#[tokio::test]
async fn test_failed_download_is_excluded_from_csv() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/",
        format!(
            r#"<html><body>
            <a href="https://www.airbnb.com/"><img src="{base}/missing.jpg"></a>
            <a href="/x"><img src="{base}/ok.jpg"></a>
            </body></html>"#
        ),
    )
    .await;
    mount_image(&server, "/ok.jpg", b"ok").await;
    Mock::given(method("GET"))
        .and(path("/missing.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    let report = run_harvest(create_test_config(format!("{}/", base), &dir))
        .await
        .expect("Download failures should not abort the run");

    assert_eq!(report.queued, 2);
    assert_eq!(report.downloaded, 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, format!("{}/missing.jpg", base));
    assert!(!report.is_complete());

    assert!(!dir.join("0.jpg").exists());
    assert!(dir.join("1.jpg").exists());
    assert_eq!(read_csv(&dir), format!("Image URL\n{base}/ok.jpg\n"));
}

#[tokio::test]
async fn test_second_run_overwrites_csv() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/first",
        format!(
            r#"<a href="https://www.airbnb.com/"><img src="{base}/one.jpg"></a>
            <a href="/y"><img src="{base}/two.jpg"></a>"#
        ),
    )
    .await;
    mount_page(
        &server,
        "/second",
        format!(r#"<a href="https://www.airbnb.com/"><img src="{base}/three.jpg"></a>"#),
    )
    .await;
    mount_image(&server, "/one.jpg", b"1").await;
    mount_image(&server, "/two.jpg", b"2").await;
    mount_image(&server, "/three.jpg", b"3").await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    run_harvest(create_test_config(format!("{}/first", base), &dir))
        .await
        .unwrap();
    assert_eq!(
        read_csv(&dir),
        format!("Image URL\n{base}/one.jpg\n{base}/two.jpg\n")
    );

    run_harvest(create_test_config(format!("{}/second", base), &dir))
        .await
        .unwrap();
    assert_eq!(read_csv(&dir), format!("Image URL\n{base}/three.jpg\n"));
    assert_eq!(std::fs::read(dir.join("0.jpg")).unwrap(), b"3");
}

#[tokio::test]
async fn test_no_qualifying_images_writes_header_only() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/",
        r#"<html><body><a href="https://example.org/"><img src="/early.jpg"></a></body></html>"#
            .to_string(),
    )
    .await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    let report = run_harvest(create_test_config(format!("{}/", server.uri()), &dir))
        .await
        .unwrap();

    assert_eq!(report.queued, 0);
    assert!(report.records.is_empty());
    assert_eq!(read_csv(&dir), "Image URL\n");
}

#[tokio::test]
async fn test_relative_source_resolves_against_redirect_target() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gallery"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/gallery/"))
        .mount(&server)
        .await;
    mount_page(
        &server,
        "/gallery/",
        r#"<a href="https://www.airbnb.com/"><img src="a.jpg"></a>"#.to_string(),
    )
    .await;
    mount_image(&server, "/gallery/a.jpg", b"moved").await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    let report = run_harvest(create_test_config(
        format!("{}/gallery", server.uri()),
        &dir,
    ))
    .await
    .unwrap();

    assert_eq!(report.page_url, format!("{}/gallery/", server.uri()));
    assert_eq!(report.downloaded, 1, "failed: {:?}", report.failed);
    assert_eq!(std::fs::read(dir.join("0.jpg")).unwrap(), b"moved");
    assert_eq!(read_csv(&dir), "Image URL\na.jpg\n");
}

#[tokio::test]
async fn test_relative_image_source_is_resolved() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/gallery/index.html",
        r#"<a href="https://www.airbnb.com/"><img src="thumbs/a.jpg"></a>"#.to_string(),
    )
    .await;
    mount_image(&server, "/gallery/thumbs/a.jpg", b"relative").await;

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("files");

    let report = run_harvest(create_test_config(
        format!("{}/gallery/index.html", server.uri()),
        &dir,
    ))
    .await
    .unwrap();

    assert_eq!(report.downloaded, 1);
    assert_eq!(std::fs::read(dir.join("0.jpg")).unwrap(), b"relative");
    // The CSV keeps the source as written in the page
    assert_eq!(read_csv(&dir), "Image URL\nthumbs/a.jpg\n");
}
