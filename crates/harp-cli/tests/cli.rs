use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(deprecated)]
fn get_harp_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("harp")
}

fn harp() -> Command {
    let mut cmd = Command::new(get_harp_bin());
    cmd.env_remove("HARP_ARCHIVE")
        .env_remove("HARP_FILTER")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

#[test]
fn test_help() {
    harp()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--archive"))
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("--timeout"));

    harp().arg("-h").assert().success();
}

#[test]
fn test_missing_archive_flag() {
    harp()
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--archive"));
}

#[test]
fn test_archive_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.har");

    harp()
        .arg("--archive")
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("HAR file not found"));
}

#[test]
fn test_malformed_archive() {
    let temp_dir = TempDir::new().unwrap();
    let invalid = temp_dir.path().join("invalid.har");
    std::fs::write(&invalid, "{not valid json").unwrap();

    harp()
        .arg("-a")
        .arg(&invalid)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse HAR file"));
}

#[test]
fn test_no_matching_entry() {
    harp()
        .arg("-a")
        .arg(fixture_path("sample.har"))
        .arg("--filter=nothing-like-this")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "No entry with a URL containing \"nothing-like-this\"",
        ));
}

#[test]
fn test_list_with_env_archive() {
    harp()
        .env("HARP_ARCHIVE", fixture_path("sample.har"))
        .args(["--list", "--filter", "x.test/api"])
        .assert()
        .success()
        .stdout(
            "GET: https://x.test/api/series?dateRange=2024\n\
             PATCH: https://x.test/api/series/7?dateRange=2025\n",
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_replay_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("dateRange", "2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"points": [1, 2]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let archive = temp_dir.path().join("recorded.har");
    let entry = |method: &str, url: String| {
        json!({
            "startedDateTime": "2024-01-01T00:00:00Z",
            "request": {"method": method, "url": url, "headers": []},
            "response": {"status": 200, "content": {}}
        })
    };
    let har = json!({
        "log": {
            "version": "1.2",
            "creator": {"name": "test", "version": "1.0"},
            "entries": [
                entry("GET", format!("{}/api?dateRange=2024", server.uri())),
                entry("POST", format!("{}/other", server.uri())),
            ]
        }
    });
    std::fs::write(&archive, har.to_string()).unwrap();

    harp()
        .arg(format!("--archive={}", archive.display()))
        .arg("--filter=dateRange")
        .assert()
        .success()
        .stdout("{\n    \"points\": [\n        1,\n        2\n    ]\n}\n")
        .stderr(predicate::str::contains("Replay: GET:"));
}
