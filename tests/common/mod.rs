//! Shared testing utilities for polyprice CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const PRICES_JSON: &str = r#"[
  {
    "id": "p-1",
    "product": "PP RAFFIA",
    "location": "Mumbai",
    "price_range": "₹89 - ₹92.75",
    "price_change": 1.25,
    "price_change_percent": "+1.38%",
    "transit_time": "2 DAYS",
    "last_updated": "2025-06-02T09:15:30.123000"
  },
  {
    "id": "p-2",
    "product": "HD GPBM",
    "location": "Delhi",
    "price_range": "₹101 - ₹104",
    "price_change": -0.5,
    "price_change_percent": "-0.49%",
    "transit_time": "3 DAYS",
    "last_updated": "2025-06-02T09:15:30Z"
  },
  {
    "id": "p-3",
    "product": "PP INJECTION",
    "location": "Navi Mumbai",
    "price_range": "₹95 - ₹97",
    "price_change": 0.0,
    "price_change_percent": "0.00%",
    "transit_time": "1 DAY",
    "last_updated": "2025-06-01T18:00:00"
  }
]"#;

/// Isolated environment with a mock catalog service.
pub struct TestContext {
    root: TempDir,
    server: ServerGuard,
}

impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, server: Server::new() }
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Base URL of the mock catalog API.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.server.url())
    }

    /// Build a command for the compiled `polyprice` binary pointed at the mock service.
    pub fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.args(["--api-url", &self.api_url()]);
        cmd
    }

    /// Build a command without any catalog URL override.
    pub fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("polyprice").expect("Failed to locate polyprice binary");
        cmd.current_dir(self.root.path()).env_remove("POLYPRICE_API_URL").env("NO_COLOR", "1");
        cmd
    }

    /// Write a config file into the test root and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("polyprice.toml");
        fs::write(&path, content).expect("Failed to write config file");
        path
    }

    pub fn mock_json(&mut self, method: &str, path: &str, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Serve prices, locations, polymer types and the given favorites.
    pub fn serve_catalog(&mut self, favorites: &[&str]) -> Vec<Mock> {
        let favorites_body = serde_json::json!({ "favorites": favorites }).to_string();
        vec![
            self.mock_json("GET", "/api/prices", PRICES_JSON),
            self.mock_json(
                "GET",
                "/api/locations",
                r#"{"locations": ["Mumbai", "Delhi", "Navi Mumbai"]}"#,
            ),
            self.mock_json("GET", "/api/polymer-types", r#"{"polymer_types": ["HD", "PP"]}"#),
            self.mock_json("GET", "/api/favorites", &favorites_body),
        ]
    }
}
