//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "roster";
const APPLICATION: &str = "roster";

/// Name of the active log file.
const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs live.
///
/// - Linux: `$XDG_CACHE_HOME/roster` or `~/.cache/roster`
/// - macOS: `~/Library/Caches/dev.roster.roster`
/// - Windows: `C:\Users\<User>\AppData\Local\roster\roster\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/roster` or `~/.config/roster`
/// - macOS: `~/Library/Application Support/dev.roster.roster`
/// - Windows: `C:\Users\<User>\AppData\Roaming\roster\roster\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to `settings.json`.
pub fn settings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("settings.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rotate logs: rename latest.log to a timestamped name, clean up old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    rotate_logs_in(&cache, &chrono::Local::now().format("%Y%m%d_%H%M%S").to_string());
}

fn rotate_logs_in(dir: &Path, timestamp: &str) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let archived = dir.join(format!("{}.log", timestamp));
        let _ = fs::rename(&latest, &archived);
    }
    cleanup_old_logs(dir, MAX_OLD_LOGS);
}

/// Remove archived logs, keeping only the `keep` most recent.
fn cleanup_old_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Archived names are timestamps, so name order is age order
    logs.sort_by_key(|e| e.file_name());

    if logs.len() > keep {
        for entry in logs.iter().take(logs.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }
    }
}
