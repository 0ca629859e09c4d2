use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn tagsift(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tagsift").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir);
    cmd
}

fn write_items(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("comments.txt");
    fs::write(
        &path,
        "Building a cache eviction policy\n\nNotes on cats\nCache the cats\n",
    )
    .unwrap();
    path
}

#[test]
fn test_filter_plain_keeps_matching_lines() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());

    tagsift(temp_dir.path())
        .arg("filter")
        .arg(&items)
        .args(["-t", "cache", "-f", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Building a [cache] eviction policy"))
        .stdout(predicate::str::contains("[Cache] the cats"))
        .stdout(predicate::str::contains("Notes on cats").not())
        .stdout(predicate::str::contains("2 of 3 items match [cache]."));
}

#[test]
fn test_filter_all_flag_includes_hidden() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());

    tagsift(temp_dir.path())
        .arg("filter")
        .arg(&items)
        .args(["-t", "cache,cats", "-f", "plain", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes on cats"))
        .stdout(predicate::str::contains("[Cache] the [cats]"))
        .stdout(predicate::str::contains("1 of 3 items match [cache, cats]."));
}

#[test]
fn test_filter_html_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();

    tagsift(temp_dir.path())
        .args(["filter", "-t", "rust", "-f", "html"])
        .write_stdin("RustLang <3\nGo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"1. <span class="highlighted-tag">Rust</span>Lang &lt;3"#,
        ))
        .stdout(predicate::str::contains("Go").not());
}

#[test]
fn test_filter_json_from_json_items() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = temp_dir.path().join("items.json");
    fs::write(
        &items,
        r#"[{"id": "c1", "text": "see a.b here"}, {"id": "c2", "text": "see aXb here"}]"#,
    )
    .unwrap();

    let output = tagsift(temp_dir.path())
        .arg("filter")
        .arg(&items)
        .args(["-t", "a.b", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["total"], 2);
    assert_eq!(value["summary"]["visible"], 1);
    assert_eq!(value["results"][0]["id"], "c1");
    assert_eq!(
        value["results"][0]["rendered"],
        r#"see <span class="highlighted-tag">a.b</span> here"#
    );
}

#[test]
fn test_filter_without_tags_shows_everything() {
    let temp_dir = tempfile::tempdir().unwrap();
    let items = write_items(temp_dir.path());

    tagsift(temp_dir.path())
        .arg("filter")
        .arg(&items)
        .args(["-f", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3. Cache the cats"))
        .stdout(predicate::str::contains("No tags, showing all 3 items."));
}

#[test]
fn test_filter_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    tagsift(temp_dir.path())
        .args(["filter", "does-not-exist.txt", "-t", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Source error"));
}

#[test]
fn test_tags_command_dedups_and_trims() {
    let temp_dir = tempfile::tempdir().unwrap();

    tagsift(temp_dir.path())
        .args(["tags", " rust , cache,rust,, "])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. rust"))
        .stdout(predicate::str::contains("2. cache"))
        .stdout(predicate::str::contains("3.").not());
}

#[test]
fn test_config_roundtrip_changes_highlight() {
    let temp_dir = tempfile::tempdir().unwrap();

    tagsift(temp_dir.path())
        .args(["config", "highlight-class", "hit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("highlight-class set to hit"));

    tagsift(temp_dir.path())
        .args(["config", "format", "html"])
        .assert()
        .success();

    tagsift(temp_dir.path())
        .args(["config", "highlight-class"])
        .assert()
        .success()
        .stdout("hit\n");

    tagsift(temp_dir.path())
        .args(["filter", "-t", "cat"])
        .write_stdin("a cat\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"a <span class="hit">cat</span>"#));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    tagsift(temp_dir.path())
        .args(["config", "color", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: color"));
}

#[test]
fn test_filter_html_keeps_entities_whole() {
    let temp_dir = tempfile::tempdir().unwrap();

    tagsift(temp_dir.path())
        .args(["filter", "-t", "amp", "-f", "html"])
        .write_stdin("example & test\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"1. ex<span class="highlighted-tag">amp</span>le &amp; test"#,
        ));
}
