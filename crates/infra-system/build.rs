// Captures the compiler version and target triple for BuildRuntimeInfo

use std::env;
use std::process::Command;

fn main() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());

    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let target = env::var("TARGET").unwrap_or_default();

    println!("cargo:rustc-env=ALARM_PROBE_RUSTC_VERSION={}", version);
    println!("cargo:rustc-env=ALARM_PROBE_TARGET={}", target);
    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-changed=build.rs");
}
