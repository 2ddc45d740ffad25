use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    let hash = run(["git", "rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    let status = match run(["git", "status", "--porcelain"]) {
        Some(out) if out.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    let rustc = run(["rustc", "--version"]).unwrap_or_else(|| "unknown".into());
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

    emit("SALES_CORE_BUILD_HASH", &hash);
    emit("SALES_CORE_BUILD_STATUS", status);
    emit("SALES_CORE_BUILD_TIMESTAMP", &timestamp);
    emit("SALES_CORE_BUILD_TARGET", &env_or("TARGET", "unknown-target"));
    emit("SALES_CORE_BUILD_PROFILE", &env_or("PROFILE", "unknown-profile"));
    emit("SALES_CORE_BUILD_RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env={key}={value}");
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Runs a command and returns its trimmed stdout when it succeeds.
fn run<const N: usize>(argv: [&str; N]) -> Option<String> {
    let (program, args) = argv.split_first()?;
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
