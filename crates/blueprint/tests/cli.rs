#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary isolated from the user's config and environment.
fn blueprint_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("blueprint"));
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("BLUEPRINT_PAGE_SIZE")
        .env_remove("BLUEPRINT_MAX_TAGS")
        .env_remove("RUST_LOG");
    cmd
}

fn write_snapshot(dir: &TempDir) -> std::path::PathBuf {
    let now = Utc::now();
    let blueprints: Vec<_> = (1..=7)
        .map(|i| {
            serde_json::json!({
                "id": i,
                "file_id": format!("file{}", i),
                "author_id": 1,
                "title": format!("Blueprint {}", i),
                "exposure": if i == 7 { "private" } else { "public" },
                "created_at": (now - Duration::days(i)).to_rfc3339(),
            })
        })
        .collect();
    let snapshot = serde_json::json!({
        "users": [
            {"id": 1, "username": "anonymous"},
            {"id": 2, "username": "visitor"},
        ],
        "blueprints": blueprints,
        "tags": [],
    });
    let path = dir.path().join("snapshot.json");
    fs::write(&path, snapshot.to_string()).unwrap();
    path
}

#[test]
fn test_video_resolves_youtube() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .args(["video", "https://www.youtube.com/watch?v=5qap5aO4i9A"])
        .assert()
        .success()
        .stdout("youtube\t//www.youtube.com/embed/5qap5aO4i9A\n");
}

#[test]
fn test_video_invalid_fails() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .args(["video", "https://example.com/watch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Video is invalid"));
}

#[test]
fn test_video_json() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .args(["--json", "video", "vimeo.com/76979871"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"provider\": \"vimeo\""))
        .stdout(predicate::str::contains("player.vimeo.com/video/76979871"));
}

#[test]
fn test_tags_from_stdin() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .arg("tags")
        .write_stdin("Foo  Bar\nfoo bar\nbad<tag>\n\nbaz\n")
        .assert()
        .success()
        .stdout("1\tfoo-bar\tfoo bar (new)\n2\tbaz\tbaz (new)\n");
}

#[test]
fn test_tags_reuses_dictionary_ids() {
    let home = TempDir::new().unwrap();
    let dict = home.path().join("tags.json");
    fs::write(&dict, r#"[{"id": 7, "name": "baz", "slug": "baz"}]"#).unwrap();

    blueprint_cmd(&home)
        .args(["tags", "--dictionary", dict.to_str().unwrap()])
        .write_stdin("baz\nqux\n")
        .assert()
        .success()
        .stdout("7\tbaz\tbaz\n8\tqux\tqux (new)\n");
}

#[test]
fn test_tags_invalid_encoding() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .arg("tags")
        .write_stdin(vec![0x66u8, 0xff, 0xfe])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid encoding"));
}

#[test]
fn test_since_with_reference_time() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .args([
            "since",
            "2024-03-14 12:00:00",
            "--now",
            "2024-03-15 12:00:00",
        ])
        .assert()
        .success()
        .stdout("1 days ago\n");
}

#[test]
fn test_since_rejects_garbage() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .args(["since", "yesterday"])
        .assert()
        .failure();
}

#[test]
fn test_paginate_second_page() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .args(["paginate", "--total", "30", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 2 of 6"))
        .stdout(predicate::str::contains("offset 5 limit 5"))
        .stdout(predicate::str::contains("« Previous page | 1 [2] 3 4 5 6 | Next page »"));
}

#[test]
fn test_paginate_uses_configured_page_size() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "page_size = 10\n").unwrap();

    blueprint_cmd(&home)
        .args(["--config", config.to_str().unwrap(), "paginate", "--total", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1 of 3"));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    blueprint_cmd(&home)
        .env("BLUEPRINT_PAGE_SIZE", "0")
        .args(["paginate", "--total", "3"])
        .assert()
        .failure();
}

#[test]
fn test_profile_public_view() {
    let home = TempDir::new().unwrap();
    let data = write_snapshot(&home);

    blueprint_cmd(&home)
        .args(["profile", "anonymous", "--data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("anonymous (page 1 of 2)\n"))
        .stdout(predicate::str::contains("1 days ago  Blueprint 1  /blueprint/file1/"))
        .stdout(predicate::str::contains("Blueprint 7").not());
}

#[test]
fn test_profile_owner_sees_private() {
    let home = TempDir::new().unwrap();
    let data = write_snapshot(&home);

    blueprint_cmd(&home)
        .args([
            "profile",
            "anonymous",
            "--data",
            data.to_str().unwrap(),
            "--viewer",
            "1",
            "--page",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blueprint 7"))
        .stdout(predicate::str::contains("[private]"));
}

#[test]
fn test_profile_page_out_of_range() {
    let home = TempDir::new().unwrap();
    let data = write_snapshot(&home);

    blueprint_cmd(&home)
        .args([
            "profile",
            "anonymous",
            "--data",
            data.to_str().unwrap(),
            "--page",
            "9",
        ])
        .assert()
        .failure();
}

#[test]
fn test_profile_unknown_user() {
    let home = TempDir::new().unwrap();
    let data = write_snapshot(&home);

    blueprint_cmd(&home)
        .args(["profile", "nobody", "--data", data.to_str().unwrap()])
        .assert()
        .failure();
}
