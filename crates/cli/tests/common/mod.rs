#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";
pub const MODEL: &str = "test-model";

pub fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Chat-completion response whose first choice carries `content`.
pub fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
    }))
}

/// Metadata reply as the model would phrase it.
pub fn metadata_reply(description: &str, keywords: &[&str]) -> ResponseTemplate {
    completion(&json!({"description": description, "keywords": keywords}).to_string())
}

/// An authenticated chat-completion request against the backend.
pub fn chat_request() -> MockBuilder {
    Mock::given(method("POST"))
        .and(path("/api/v3/chat/completions"))
        .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
}

pub fn base_url(server: &MockServer) -> String {
    format!("{}/api/v3", server.uri())
}

/// JSON bodies of every request the backend received, in order.
pub async fn sent_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.body_json().unwrap())
        .collect()
}

/// Write a config file pointing the provider at `base_url` without retries.
pub fn write_config(dir: &Path, base_url: &str) -> PathBuf {
    write_config_with_level(dir, base_url, "warn")
}

pub fn write_config_with_level(dir: &Path, base_url: &str, level: &str) -> PathBuf {
    let path = dir.join("config.toml");
    write_file(
        &path,
        &format!(
            "[provider]\nbase_url = \"{base_url}\"\nmax_retries = 0\ntimeout_secs = 10\n\n[logging]\nlevel = \"{level}\"\n"
        ),
    );
    path
}

/// The binary with a scrubbed environment rooted at `xdg`.
pub fn seo_helper(xdg: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("seo-helper"));
    cmd.env("XDG_CONFIG_HOME", xdg)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ARK_API_KEY")
        .env_remove("ARK_API_MODEL")
        .env_remove("ARK_BASE_URL");
    cmd
}

/// [`seo_helper`] with credentials for the mock backend.
pub fn seo_helper_with_key(xdg: &Path) -> Command {
    let mut cmd = seo_helper(xdg);
    cmd.env("ARK_API_KEY", API_KEY).env("ARK_API_MODEL", MODEL);
    cmd
}
