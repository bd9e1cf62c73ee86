//! Tags command tests
//!
//! Tests tag aggregation and the three-tier color resolution as seen
//! through the CLI: registry files, per-document overrides, and
//! automatic assignment.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn inkpost_cmd() -> Command {
    Command::cargo_bin("inkpost").unwrap()
}

#[test]
fn test_tags_empty_directory() {
    let site = common::TestSite::new();
    inkpost_cmd()
        .current_dir(&site.path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found."));
}

#[test]
fn test_tags_counts_across_posts() {
    let site = common::TestSite::with_sample_posts();
    inkpost_cmd()
        .current_dir(&site.path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags (3 tags):"))
        .stdout(predicate::str::contains("Docs"))
        .stdout(predicate::str::contains("2 posts"));
}

#[test]
fn test_tags_auto_assignment_is_stable_round_robin() {
    let site = common::TestSite::new();
    site.write_post(
        "one.md",
        "---\ntitle: One\ntags: [Alpha, Beta]\n---\nbody\n",
    );
    // With no registry and no overrides, the first two distinct tags get
    // the first two palette entries.
    inkpost_cmd()
        .current_dir(&site.path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("blue"))
        .stdout(predicate::str::contains("green"));
}

#[test]
fn test_tags_uses_yaml_registry() {
    let site = common::TestSite::new();
    site.write_post("one.md", "---\ntitle: One\ntags: [Alpha]\n---\nbody\n");
    site.write_registry("tags.yaml", "tags:\n  Alpha:\n    color: pink\n");
    inkpost_cmd()
        .current_dir(&site.path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("pink"));
}

#[test]
fn test_tags_uses_json_registry() {
    let site = common::TestSite::new();
    site.write_post("one.md", "---\ntitle: One\ntags: [Alpha]\n---\nbody\n");
    site.write_registry("tags.json", r#"{ "tags": { "Alpha": { "color": "teal" } } }"#);
    inkpost_cmd()
        .current_dir(&site.path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("teal"));
}

#[test]
fn test_tags_registry_typo_falls_back_to_default() {
    let site = common::TestSite::new();
    site.write_post("one.md", "---\ntitle: One\ntags: [Alpha]\n---\nbody\n");
    site.write_registry("tags.yaml", "tags:\n  Alpha:\n    color: purpel\n");
    inkpost_cmd()
        .current_dir(&site.path)
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("blue"));
}

#[test]
fn test_tags_explicit_registry_path() {
    let site = common::TestSite::new();
    site.write_post("one.md", "---\ntitle: One\ntags: [Alpha]\n---\nbody\n");
    let registry_path = site.path.join("custom-tags.yaml");
    std::fs::write(&registry_path, "tags:\n  Alpha:\n    color: orange\n").unwrap();
    inkpost_cmd()
        .current_dir(&site.path)
        .args(["--tag-config", "custom-tags.yaml", "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("orange"));
}

#[test]
fn test_tags_malformed_registry_fails() {
    let site = common::TestSite::new();
    site.write_post("one.md", "---\ntitle: One\ntags: [Alpha]\n---\nbody\n");
    site.write_registry("tags.json", "{ not json");
    inkpost_cmd()
        .current_dir(&site.path)
        .arg("tags")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse tag registry"));
}

#[test]
fn test_tags_detailed_shows_descriptions_and_classes() {
    let site = common::TestSite::new();
    site.write_post("one.md", "---\ntitle: One\ntags: [Alpha]\n---\nbody\n");
    site.write_registry(
        "tags.yaml",
        "tags:\n  Alpha:\n    color: indigo\n    description: The first tag\n",
    );
    inkpost_cmd()
        .current_dir(&site.path)
        .args(["tags", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The first tag"))
        .stdout(predicate::str::contains("bg-indigo-100"))
        .stdout(predicate::str::contains("dark:bg-indigo-900/20"));
}
