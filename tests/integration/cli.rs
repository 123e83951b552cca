use std::path::Path;
use std::process::{Command, Output};

/// Runs the built `merge_selector` binary against `config_path`.
pub fn run_cli(config_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_merge_selector"))
        .arg("--config")
        .arg(config_path)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .expect("Failed to run merge_selector")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
