#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pks() -> Command {
    cargo_bin_cmd!("parkspot")
}

/// Create a unique config file path inside the system temp dir and remove
/// any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_parkspot.conf", name));
    let conf_path = path.to_string_lossy().to_string();
    fs::remove_file(&conf_path).ok();
    conf_path
}

/// Write a config pointing at an unreachable API so commands that would
/// touch the network fail fast and deterministically
pub fn write_unreachable_config(name: &str) -> String {
    let conf_path = setup_test_config(name);
    fs::write(
        &conf_path,
        concat!(
            "api_url: \"http://127.0.0.1:9/api\"\n",
            "email: tester@example.com\n",
            "nom: Tester\n",
            "prenom: Tess\n",
            "timeout_secs: 1\n",
            "max_days: 5\n",
            "max_days_manager: 30\n",
        ),
    )
    .expect("failed to write test config");
    conf_path
}
