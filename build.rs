use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed=GIT_VERSION");

    println!("cargo:rustc-env=GIT_VERSION={}", resolve_version());
}

/// Resolve the build version: explicit `GIT_VERSION` (container builds),
/// then `git describe`, then `dev`.
fn resolve_version() -> String {
    if let Some(version) = std::env::var("GIT_VERSION")
        .ok()
        .filter(|v| !v.is_empty() && v != "dev")
    {
        return version;
    }

    Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "dev".to_string())
}
