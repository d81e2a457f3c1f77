//
//  activecampaign
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Smoke tests for the `ac` binary.

use std::path::Path;

use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;
use tempfile::TempDir;

const ENV_VARS: [&str; 6] = [
    "AC_API_URL",
    "AC_API_KEY",
    "AC_CONNECTION_ID",
    "AC_ACCOUNT",
    "AC_CONFIG_DIR",
    "AC_DEBUG",
];

/// `ac` with a private config directory and no inherited account settings.
fn ac(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ac").unwrap();
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("AC_CONFIG_DIR", config_dir);
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ActiveCampaign"))
        .stdout(predicate::str::contains("contact"))
        .stdout(predicate::str::contains("deal"));
}

#[test]
fn version_command() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ac version "));
}

#[test]
fn completion_generates_script() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_ac"));
}

#[test]
fn config_set_get_and_list() {
    let dir = TempDir::new().unwrap();

    ac(dir.path())
        .args(["config", "set", "api_url", "acme.api-us1.com/api/3"])
        .assert()
        .success();
    ac(dir.path())
        .args(["config", "set", "api_key", "supersecret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("supersecret").not());

    ac(dir.path())
        .args(["config", "get", "api_url"])
        .assert()
        .success()
        .stdout("https://acme.api-us1.com\n");

    ac(dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default (default)"))
        .stdout(predicate::str::contains("*******cret"));

    let content = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(content.contains("default_account = \"default\""));
    assert!(content.contains("api_key = \"supersecret\""));
}

#[test]
fn config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key 'editor'"));
}

#[test]
fn config_use_switches_default() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args(["--account", "main", "config", "set", "api_url", "main.api-us1.com"])
        .assert()
        .success();
    ac(dir.path())
        .args(["--account", "sandbox", "config", "set", "api_url", "sandbox.api-us1.com"])
        .assert()
        .success();

    ac(dir.path())
        .args(["config", "use", "sandbox"])
        .assert()
        .success();
    ac(dir.path())
        .args(["config", "get", "api_url"])
        .assert()
        .success()
        .stdout("https://sandbox.api-us1.com\n");

    ac(dir.path())
        .args(["config", "use", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'missing' is not configured"));
}

#[test]
fn config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args(["--json", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("\"exists\": false"));
}

#[test]
fn commands_need_an_account() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args(["contact", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No API URL configured"));
}

#[test]
fn deal_create_requires_stage_or_group() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args([
            "deal", "create", "--title", "Pilot", "--value", "100", "--currency", "usd",
            "--owner", "1",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Either the stage or group must be set"));
}

#[test]
fn invalid_param_is_usage_error() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args(["tag", "list", "--param", "novalue"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Expected KEY=VALUE"));
}

#[test]
fn tag_list_json_against_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/3/tags")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "k".into()),
            Matcher::UrlEncoded("search".into(), "vip".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"tags": [{"id": "3", "tag": "vip"}]}"#)
        .create();

    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .env("AC_API_URL", server.url())
        .env("AC_API_KEY", "k")
        .args(["--json", "tag", "list", "--search", "vip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tag\": \"vip\""));

    mock.assert();
}

#[test]
fn contact_tag_against_server() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/3/contactTags/")
        .match_query(Matcher::UrlEncoded("api_key".into(), "k".into()))
        .match_body(Matcher::Json(serde_json::json!({"contactTag": {"contact": 7, "tag": 3}})))
        .with_status(201)
        .with_body(r#"{"contactTag": {"id": "1"}}"#)
        .create();

    let url = server.url();
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .args(["--api-url", url.as_str(), "--api-key", "k", "contact", "tag", "7", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added tag 3 to contact 7"));

    mock.assert();
}

#[test]
fn not_found_exit_code() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/3/deals/99")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"error": "No Result found for Deal with id 99"}"#)
        .create();

    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .env("AC_API_URL", server.url())
        .env("AC_API_KEY", "k")
        .args(["deal", "get", "99"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("HTTP error 404: No Result found for Deal with id 99"));
}

#[test]
fn connection_customers_needs_connection_id() {
    let dir = TempDir::new().unwrap();
    ac(dir.path())
        .env("AC_API_URL", "http://127.0.0.1:1")
        .env("AC_API_KEY", "k")
        .args(["connection", "customers"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no connection id given"));
}
