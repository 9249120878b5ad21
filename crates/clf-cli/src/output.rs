//! Terminal output helpers.
//!
//! `colored` disables itself automatically when stdout is not a tty,
//! so piped output stays plain text.

use colored::Colorize;
use std::fmt::Display;

/// Print the run banner.
pub(crate) fn banner(title: &str) {
    println!("{}", format!("------ {title} ------").bold());
}

/// Print a section header.
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print an indented key/value line.
pub(crate) fn kv(key: &str, value: impl Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a progress line.
pub(crate) fn info(msg: &str) {
    println!("{} {}", "[INFO]".blue(), msg);
}
