#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME/APPDATA pointed at an isolated directory so
/// the user's real configuration is never read.
pub fn rco(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("rclockout");
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}

/// Create a fresh, empty home directory inside the system temp dir
pub fn setup_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclockout_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rclockout.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Write a config file under `home`, as `init` would, with the given YAML.
pub fn write_config(home: &PathBuf, yaml: &str) -> PathBuf {
    let dir = if cfg!(target_os = "windows") {
        home.join("rclockout")
    } else {
        home.join(".rclockout")
    };
    fs::create_dir_all(&dir).expect("create config dir");
    let file = dir.join("rclockout.conf");
    fs::write(&file, yaml).expect("write config");
    file
}
