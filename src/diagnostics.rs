//! Stderr diagnostics shared by validation, emission and the CLI.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

/// Silence `info` lines. Warnings are always printed.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn info(msg: impl Display) {
    if !QUIET.load(Ordering::Relaxed) {
        eprintln!("INFO: {}", msg);
    }
}

pub fn warn(msg: impl Display) {
    eprintln!("WARN: {}", msg);
}

/// Context line for a failed step, tagged with the tool name so it stands out
/// in anyhow's `Caused by:` chain.
pub fn error_message(msg: impl Display) -> String {
    format!("binop-gen: {}", msg)
}
