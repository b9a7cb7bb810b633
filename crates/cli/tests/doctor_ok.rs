mod common;

use assert_cmd::prelude::*;
use common::{seo_helper, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

/// Replace the machine-specific config path so the report is stable.
fn normalize_config_path(s: &str) -> String {
    s.lines()
        .map(|line| if line.starts_with("config: ") { "config: <CFG>" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    write_file(
        &cfg,
        r#"
[provider]
model = "ep-from-file"
max_retries = 3
"#,
    );

    let assert = seo_helper(tmp.path())
        .env("ARK_API_KEY", "sk-abcdef1234")
        .args(["doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(cfg.to_str().unwrap()))
        .stdout(predicate::str::contains("sk-abcdef").not());

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    insta::assert_snapshot!(normalize_config_path(&out), @r"
    OK   seo-helper doctor
    config: <CFG>
    model: ep-from-file
    base_url: https://ark.cn-beijing.volces.com/api/v3
    api_key: *********1234
    max_retries: 3
    timeout_secs: 120
    temperature: 0.8
    logging.level: info
    ");
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    write_file(
        &tmp.path().join("seo-helper/config.toml"),
        "[provider]\nbase_url = \"http://localhost:1234/v3\"\n",
    );

    seo_helper(tmp.path())
        .env("ARK_API_KEY", "k")
        .env("ARK_API_MODEL", "ep-env")
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("model: ep-env"))
        .stdout(predicate::str::contains("base_url: http://localhost:1234/v3"));
}

#[test]
fn doctor_without_config_file_uses_defaults() {
    let tmp = tempdir().unwrap();

    seo_helper(tmp.path())
        .env("ARK_API_KEY", "k")
        .env("ARK_API_MODEL", "ep-env")
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("config: (none, using defaults)"))
        .stdout(predicate::str::contains("base_url: https://ark.cn-beijing.volces.com/api/v3"));
}
