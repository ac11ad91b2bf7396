use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookshelf_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookshelf"))
}

/// Runs `bookshelf` in an empty directory so no stray config is picked up.
fn bookshelf_in(dir: &TempDir) -> Command {
    let mut cmd = bookshelf_cmd();
    cmd.current_dir(dir.path()).env_remove("BOOKSHELF_CONFIG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookshelf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    bookshelf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args(["--config", "missing.yml", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_unwritable_log_file_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("blocker"), "").unwrap();

    bookshelf_in(&temp_dir)
        .args(["--log-file", "blocker/logs/bookshelf.log", "schema"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_log_file_is_written() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args(["--log-file", "logs/bookshelf.log", "query", r#"mutation { addAuthor(name: "Logged") { id } }"#])
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path().join("logs"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(entries.iter().any(|name| name.starts_with("bookshelf.log")));
}

// =============================================================================
// Schema
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Query"))
        .stdout(predicate::str::contains("type Mutation"))
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Book"));
}

// =============================================================================
// Query
// =============================================================================

#[test]
fn test_query_seeded_book() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "{ book(id: 1) { name author { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"data":{"book":{"name":"Harry Potter and the Chamber of Secrets","author":{"name":"J. K. Rowling"}}}}"#,
        ));
}

#[test]
fn test_query_missing_book_is_null() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "{ book(id: 999) { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"data":{"book":null}}"#));
}

#[test]
fn test_query_documents_share_one_store() {
    let temp_dir = TempDir::new().unwrap();

    let output = bookshelf_in(&temp_dir)
        .args([
            "query",
            "mutation { removeBook(id: 1) { id } }",
            "{ books { id } }",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        r#"{"data":{"books":[{"id":2},{"id":3},{"id":4},{"id":5},{"id":6},{"id":7},{"id":8}]}}"#
    );
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args([
            "query",
            "query ($id: Int) { author(id: $id) { books { name } } }",
            "--variables",
            r#"{"id": 3}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Way of Shadows"))
        .stdout(predicate::str::contains("Beyond the Shadows"));
}

#[test]
fn test_query_from_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("authors.graphql"), "{ authors { name } }").unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "@authors.graphql"])
        .assert()
        .success()
        .stdout(predicate::str::contains("J. R. R. Tolkien"));
}

#[test]
fn test_query_validation_error_is_reported_in_response() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "{ book(id: 1) { title } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""errors""#));
}

#[test]
fn test_invalid_variables_fail() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "{ books { id } }", "--variables", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Variables must be a JSON object"));
}

// =============================================================================
// Mutate
// =============================================================================

#[test]
fn test_mutate_wraps_body() {
    let temp_dir = TempDir::new().unwrap();

    bookshelf_in(&temp_dir)
        .args(["mutate", r#"addAuthor(name: "New Author") { id name }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 4"#))
        .stdout(predicate::str::contains(r#""name": "New Author""#));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_seed_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("seed.json"),
        r#"{
            "authors": [{ "id": 1, "name": "Octavia E. Butler" }],
            "books": [{ "id": 1, "name": "Kindred", "authorId": 1 }]
        }"#,
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("bookshelf.yml"),
        "store:\n  seed_file: seed.json\n",
    )
    .unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "{ books { name author { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"{"data":{"books":[{"name":"Kindred","author":{"name":"Octavia E. Butler"}}]}}"#,
        ));
}

#[test]
fn test_config_without_seed() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("bookshelf.yml"), "store:\n  seed: false\n").unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "{ authors { id } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"data":{"authors":[]}}"#));
}

#[test]
fn test_invalid_seed_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("seed.json"),
        r#"{ "authors": [{ "id": 1, "name": "A" }, { "id": 1, "name": "B" }] }"#,
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("bookshelf.yml"),
        "store:\n  seed_file: seed.json\n",
    )
    .unwrap();

    bookshelf_in(&temp_dir)
        .args(["query", "{ authors { id } }"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate author id 1"));
}
