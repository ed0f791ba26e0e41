// src/log.rs
// Append-only debug log. Never surfaces anything to the user.
//
// What ends up here: config resolution, every search begin/complete (with its
// sequence number), stale completions dropped, worker failures, card toggles
// and formatter fall-backs. Query text is never written, only its length.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::config::consts::{LOG_ENV, LOG_FILE};

static LOG_LOCK: Mutex<()> = Mutex::new(());
static START: OnceLock<Instant> = OnceLock::new();
static TARGET: OnceLock<Option<PathBuf>> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

/// Resolved once: `PAGE_SEARCH_LOG` overrides the path, empty disables.
fn target() -> Option<&'static PathBuf> {
    TARGET
        .get_or_init(|| match std::env::var(LOG_ENV) {
            Ok(v) if v.trim().is_empty() => None,
            Ok(v) => Some(PathBuf::from(v.trim())),
            Err(_) => Some(PathBuf::from(LOG_FILE)),
        })
        .as_ref()
}

/// `hh:mm:ss.mmm` since the first log line of this process.
fn fmt_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        elapsed.subsec_millis()
    )
}

/// One `[elapsed][LEVEL] msg` line. Unwritable log = silently skipped.
pub fn write_log(level: &str, msg: &str) {
    let Some(path) = target() else { return };
    let line = format!("[{}][{level}] {msg}\n", fmt_elapsed(start().elapsed()));

    if let Ok(_guard) = LOG_LOCK.lock() {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
            let _ = file.write_all(line.as_bytes());
        }
    }
}

/// Search lifecycle, config: things worth seeing in a normal session.
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log("INFO", &format!($($arg)*))
    };
}

/// Stale completions, toggles, formatter fall-backs.
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log("DEBUG", &format!($($arg)*))
    };
}

/// Failed searches and worker spawn failures.
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log("ERROR", &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::fmt_elapsed;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(Duration::ZERO), "00:00:00.000");
        assert_eq!(fmt_elapsed(Duration::from_millis(3_723_004)), "01:02:03.004");
        assert_eq!(fmt_elapsed(Duration::from_secs(100 * 3600)), "100:00:00.000");
    }
}
