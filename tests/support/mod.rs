use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for wayfind that ignores any user config and log overrides
pub fn wayfind() -> Command {
    let mut cmd = cargo_bin_cmd!("wayfind");
    cmd.env("WAYFIND_CONFIG_DIR", isolated_config_dir())
        .env_remove("WAYFIND_CONFIG")
        .env_remove("WAYFIND_LOG");
    cmd
}

/// A config directory that never contains a config file
fn isolated_config_dir() -> PathBuf {
    std::env::temp_dir().join("wayfind-tests-without-config")
}

/// Write a TOML graph file with the given (source, destination, cost) rows
#[allow(dead_code)]
pub fn write_toml_graph(path: &Path, edges: &[(&str, &str, &str)]) {
    let mut content = String::new();
    for (source, destination, cost) in edges {
        content.push_str(&format!(
            "[[edges]]\nsource = \"{}\"\ndestination = \"{}\"\ncost = {}\n\n",
            source, destination, cost
        ));
    }
    fs::write(path, content).unwrap();
}

/// Parse stdout of a successful command as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
