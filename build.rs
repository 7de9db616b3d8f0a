use std::process::Command;

/// Version string for `hop --version`: `git describe` when building from a
/// checkout, the manifest version otherwise (crates.io tarballs, CI caches).
fn describe_version() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let raw = String::from_utf8(out.stdout).ok()?;
    let version = raw.trim().trim_start_matches('v');
    (!version.is_empty()).then(|| version.to_string())
}

fn main() {
    let version =
        describe_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=HOP_VERSION={version}");
    for watched in [".git/HEAD", ".git/refs/tags"] {
        println!("cargo:rerun-if-changed={watched}");
    }
}
