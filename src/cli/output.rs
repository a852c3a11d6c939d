//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: commands, hints
//! - Dimmed: captured command output labels

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ project .npmrc configured`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ package.json not found in the current directory`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ command not found: frobnicate`
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run from your project root`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print the command about to run. Callers pass the masked form.
///
/// Example: `running: npm config set registry https://... --userconfig .npmrc`
pub fn running(command: &str) {
    if colors_enabled() {
        println!("{} {}", style("running:").dim(), style(command).cyan());
    } else {
        println!("running: {}", command);
    }
}

/// Print captured output of a finished command under a label.
pub fn stream(label: &str, text: &str) {
    let text = text.trim_end();
    if colors_enabled() {
        println!("{} {}", style(label).dim(), text);
    } else {
        println!("{} {}", label, text);
    }
}
