//! Toolchain detection
//!
//! The generated project is built with cargo, so the create flow reports
//! whether a working toolchain is on PATH. The probe is advisory: a missing
//! cargo never fails the run.

use std::process::Command;

/// Probe for cargo in PATH, returning its version line when available
pub fn cargo_version() -> Option<String> {
    let output = Command::new("cargo").arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}
