#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use vitality_source::theme::CONFIG_DIR_ENV;

/// The `vitality` binary with colors off and an isolated config directory.
pub fn test_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vitality").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env(CONFIG_DIR_ENV, config_dir);
    cmd
}

/// A fresh config directory plus a command pointing at it.
pub fn isolated_cmd() -> (TempDir, Command) {
    let temp_dir = TempDir::new().unwrap();
    let cmd = test_cmd(temp_dir.path());
    (temp_dir, cmd)
}

/// Parses captured stdout as JSON.
pub fn stdout_json(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {text}"))
}
