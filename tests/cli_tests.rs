use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn tweetql_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tweetql"));
    // Keep the environment from leaking overrides into tests
    cmd.env_remove("TWEETQL_UPSTREAM_URL")
        .env_remove("TWEETQL_HOST")
        .env_remove("TWEETQL_PORT")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    tweetql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    tweetql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tweetql"));
}

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type Tweet"))
        .stdout(predicate::str::contains("type Torrents"))
        .stdout(predicate::str::contains("deleteTweet(id: ID!): Boolean!"));
}

// =============================================================================
// Query / Mutate
// =============================================================================

#[test]
fn test_query_ping() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("{ ping }")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ping\": \"pong\""));
}

#[test]
fn test_query_seeded_tweets_with_authors() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("{ allTweets { id text author { fullName } } }")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("first one"))
        .stdout(predicate::str::contains("second one"))
        .stdout(predicate::str::contains("nochi ai"))
        .stdout(predicate::str::contains("noah ai"));
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("query($id: ID!) { tweet(id: $id) { text } }")
        .arg("--variables")
        .arg(r#"{"id": "2"}"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("second one"));
}

#[test]
fn test_query_invalid_variables() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("{ ping }")
        .arg("--variables")
        .arg("{not json")
        .current_dir(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_query_unknown_field_reports_error() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("{ nope }")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"));
}

#[test]
fn test_mutate_post_tweet() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("mutate")
        .arg(r#"postTweet(text: "hello", userId: "1") { id text author { id } }"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"3\""))
        .stdout(predicate::str::contains("hello"));
}

#[test]
fn test_mutate_delete_missing_tweet() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("mutate")
        .arg(r#"deleteTweet(id: "404")"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleteTweet\": false"));
}

#[test]
fn test_state_does_not_survive_between_runs() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("mutate")
        .arg(r#"deleteTweet(id: "1")"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deleteTweet\": true"));

    tweetql_cmd()
        .arg("query")
        .arg(r#"{ tweet(id: "1") { text } }"#)
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("first one"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_missing_explicit_config() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("--config")
        .arg(temp_dir.path().join("missing.toml"))
        .arg("query")
        .arg("{ ping }")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_invalid_config_in_cwd() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("tweetql.toml"), "[server\nport = ").unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("{ ping }")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_invalid_upstream_url_in_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tweetql.toml"),
        "[upstream]\nbase_url = \"not a url\"\n",
    )
    .unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("{ ping }")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid upstream URL"));
}

#[test]
fn test_upstream_url_flag_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tweetql.toml"),
        "[upstream]\nbase_url = \"not a url\"\n",
    )
    .unwrap();

    tweetql_cmd()
        .arg("--upstream-url")
        .arg("http://127.0.0.1:9/api/v2")
        .arg("query")
        .arg("{ ping }")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pong"));
}

#[test]
fn test_schema_ignores_invalid_upstream_url() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tweetql.toml"),
        "[upstream]\nbase_url = \"not a url\"\n",
    )
    .unwrap();

    tweetql_cmd()
        .arg("schema")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type Movie"));
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn test_unknown_log_level_in_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("tweetql.toml"),
        "[logging]\nlevel = \"loud\"\n",
    )
    .unwrap();

    tweetql_cmd()
        .arg("query")
        .arg("{ ping }")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown log level: loud"));
}

#[test]
fn test_log_file_flag_creates_log_directory() {
    let temp_dir = TempDir::new().unwrap();

    tweetql_cmd()
        .arg("--log-file")
        .arg("logs/tweetql.log")
        .arg("query")
        .arg("{ ping }")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pong"));

    assert!(temp_dir.path().join("logs").is_dir());
}
