//! End-to-end CLI tests driving the `rollcall` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ADA: &str = r#"{"firstName": "Ada", "lastName": "Lovelace", "email": "ada@math.org",
"programme": "CS", "year": "2", "interests": "", "photo": ""}"#;
const GRACE: &str = r#"{"firstName": "Grace", "lastName": "Hopper", "email": "grace@navy.mil",
"programme": "SE", "year": "4", "interests": "compilers", "photo": "https://example.org/g.png"}"#;
const BROKEN: &str = r#"{"firstName": "", "lastName": "Nobody", "email": "not-an-email",
"programme": "", "year": "", "interests": "", "photo": "ftp://x"}"#;

fn rollcall() -> Command {
    Command::cargo_bin("rollcall").expect("binary built")
}

fn write_submissions(dir: &TempDir, entries: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("submissions.json");
    std::fs::write(&path, format!("[{}]", entries.join(","))).expect("write fixture");
    path
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_on_clean_file() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_submissions(&dir, &[ADA, GRACE]);
    rollcall()
        .arg("check")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 submissions, 0 rejected"));
}

#[test]
fn check_fails_and_names_fields_on_bad_file() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_submissions(&dir, &[ADA, BROKEN]);
    rollcall()
        .arg("check")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("First name is required."))
        .stdout(predicate::str::contains("Photo URL should start with http(s)://"))
        .stderr(predicate::str::contains("1 of 2 submissions rejected"));
}

#[test]
fn check_reports_missing_file_with_path() {
    rollcall()
        .arg("check")
        .arg("/no/such/file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/file.json"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_writes_page_with_cards_and_rows() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_submissions(&dir, &[ADA, GRACE]);
    let out = dir.path().join("roster.html");

    rollcall()
        .arg("render")
        .arg(&file)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added profile for Ada Lovelace."))
        .stdout(predicate::str::contains("2 on roster, 0 rejected, 0 removed"));

    let html = std::fs::read_to_string(&out).expect("page written");
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("CS • Year 2"));
    assert!(html.contains("data:image/svg+xml;base64,"), "Ada has no photo — placeholder");
    assert!(html.contains("https://example.org/g.png"), "Grace keeps her photo URL");
    // Newest first: Grace was submitted after Ada.
    let grace = html.find("Grace Hopper").expect("grace");
    let ada = html.find("Ada Lovelace").expect("ada");
    assert!(grace < ada);
}

#[test]
fn render_remove_by_position_retracts_profile() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_submissions(&dir, &[ADA, GRACE]);
    let out = dir.path().join("roster.html");

    rollcall()
        .arg("render")
        .arg(&file)
        .arg("--out")
        .arg(&out)
        .arg("--remove")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed profile for Ada Lovelace."))
        .stdout(predicate::str::contains("1 on roster, 0 rejected, 1 removed"));

    let html = std::fs::read_to_string(&out).expect("page written");
    // Ada's card and row are gone; only the live region still names her.
    assert!(!html.contains("ada@math.org"));
    assert!(html.contains("Removed profile for Ada Lovelace."));
    assert!(html.contains("Grace Hopper"));
}

#[test]
fn render_keeps_going_past_rejections() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_submissions(&dir, &[BROKEN, ADA]);
    let out = dir.path().join("roster.html");

    rollcall()
        .arg("render")
        .arg(&file)
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please fix the highlighted errors."))
        .stdout(predicate::str::contains("1 on roster, 1 rejected, 0 removed"));
}

#[test]
fn render_remove_of_rejected_position_fails_clearly() {
    let dir = TempDir::new().expect("tempdir");
    let file = write_submissions(&dir, &[BROKEN]);
    let out = dir.path().join("roster.html");

    rollcall()
        .arg("render")
        .arg(&file)
        .arg("--out")
        .arg(&out)
        .arg("--remove")
        .arg("1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("submission 1 was rejected"));
}

// ---------------------------------------------------------------------------
// avatar
// ---------------------------------------------------------------------------

#[test]
fn avatar_prints_initials_and_data_uri() {
    rollcall()
        .args(["avatar", "Ada", "Lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AL"))
        .stdout(predicate::str::contains("data:image/svg+xml;base64,"));
}

#[test]
fn avatar_is_deterministic_across_runs() {
    let first = rollcall().args(["avatar", "Ada", "Lovelace"]).output().expect("run");
    let second = rollcall().args(["avatar", "Ada", "Lovelace"]).output().expect("run");
    assert_eq!(first.stdout, second.stdout);
}
