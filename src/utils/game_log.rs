//! Timestamped diagnostic lines for verbose mode.
//!
//! Callers gate on their config's `verbose` flag before calling in, the same
//! way the match harness does.

use chrono::Local;

pub fn log_line(message: &str) {
    eprintln!("[{}] {message}", timestamp());
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S%.3f").to_string()
}
