// src/utils/log.rs

//! Console presentation helpers.
//!
//! Formats headers, steps and summaries on top of the `log` facade so the
//! output follows the verbosity chosen for `env_logger`.

/// Log a header
pub fn header(title: &str) {
    let border = "═".repeat(60);
    ::log::info!("{}", border);
    ::log::info!("  {}", title);
    ::log::info!("{}", border);
}

/// Log a step in a process
pub fn step(step_num: usize, total: usize, message: &str) {
    ::log::info!("[STEP {}/{}] {}", step_num, total, message);
}

/// Log a success message
pub fn success(message: &str) {
    ::log::info!("✓ {}", message);
}

/// Log a warning shown to the user
pub fn warn(message: &str) {
    ::log::warn!("{}", message);
}

/// Log a sub-item (indented)
pub fn sub_item(message: &str) {
    ::log::info!("    {}", message);
}

/// Log a multi-line block, one record per line
pub fn block(text: &str) {
    for line in text.lines() {
        ::log::info!("  {}", line);
    }
}

/// Log a summary section
pub fn summary(title: &str, items: &[(&str, String)]) {
    ::log::info!("[SUMMARY] {}", title);
    for (key, value) in items {
        ::log::info!("    {}: {}", key, value);
    }
}
