//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use clipnote::client::SummarizeClient;
use clipnote::ui::form::SummaryRequestController;
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

/// A local port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn make_controller(base_url: &str) -> SummaryRequestController {
    let client = SummarizeClient::new(base_url).expect("Failed to build client");
    SummaryRequestController::new(client, 100)
}

/// Write a config file pointing at `base_url` with logs inside the temp dir.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let log_path = temp_dir.path().join("clipnote.log");

    let content = format!(
        r#"[endpoint]
base_url = "{}"

[form]
default_max_length = 100

[logging]
level = "debug"
file = "{}"
"#,
        base_url,
        log_path.display()
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
