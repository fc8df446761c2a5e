//! Stateless styled-message formatting
//!
//! Pure functions from message to styled string. Color is handled by the
//! `colored` crate, which disables ANSI codes automatically when stdout is
//! not a terminal.

use colored::Colorize;

/// Fatal error style: red, bold.
pub fn error(msg: &str) -> String {
    format!("❌ {}", msg.red().bold())
}

/// Non-fatal warning style: yellow.
pub fn warning(msg: &str) -> String {
    format!("⚠️  {}", msg.yellow())
}

/// Completion style: green, bold.
pub fn success(msg: &str) -> String {
    format!("✅ {}", msg.green().bold())
}

/// Progress/detail style: cyan.
pub fn info(msg: &str) -> String {
    format!("{}", msg.cyan())
}
