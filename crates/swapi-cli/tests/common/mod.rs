use std::process::{Command, Output};

/// Run the CLI binary with arguments against the given base URL.
///
/// Runs on the blocking pool so a mock server on the test runtime keeps
/// answering while the process waits.
pub async fn run_cli(api_url: &str, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_swapi"));
    cmd.args(args);
    cmd.env("SWAPI_URL", api_url);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");

    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute CLI"))
        .await
        .expect("CLI task panicked")
}

/// Run the CLI and expect success.
pub async fn run_cli_success(api_url: &str, args: &[&str]) -> String {
    let output = run_cli(api_url, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(api_url: &str, args: &[&str]) -> String {
    let output = run_cli(api_url, args).await;
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        panic!("CLI command unexpectedly succeeded: {:?}\nstdout: {}", args, stdout);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
