//! Application logging functionality
//!
//! Handles log file management and output redirection

use crate::core::config_file::ConfigFile;
use std::fs;
use std::fs::OpenOptions;
use std::os::unix::io::AsRawFd;
use std::path::{Path, PathBuf};

/// Log file name for the given day, e.g. `glance-2024-05-01.log`
pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("glance-{}.log", date.format("%Y-%m-%d"))
}

/// Get the path to the current log file
pub fn current_log_file() -> PathBuf {
    ConfigFile::logs_dir().join(log_file_name(chrono::Utc::now().date_naive()))
}

/// Set up log redirection to ~/.config/glance/logs/
pub fn setup_log_redirection() -> anyhow::Result<()> {
    // Check if config directory exists - if not, we'll fail gracefully
    let config_dir = ConfigFile::config_dir();
    if !config_dir.exists() {
        return Err(anyhow::anyhow!(
            "Config directory doesn't exist (run with --new-config first)"
        ));
    }

    redirect_output_to(&current_log_file())
}

/// Point stdout and stderr at `log_file_path`, truncating it
fn redirect_output_to(log_file_path: &Path) -> anyhow::Result<()> {
    if let Some(logs_dir) = log_file_path.parent() {
        fs::create_dir_all(logs_dir)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file_path)?;

    unsafe {
        libc::dup2(log_file.as_raw_fd(), libc::STDOUT_FILENO);
        libc::dup2(log_file.as_raw_fd(), libc::STDERR_FILENO);
    }

    println!(
        "=== Glance started at {} ===",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Logs redirected to: {:?}", log_file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(log_file_name(date), "glance-2024-05-01.log");
        assert!(current_log_file().starts_with(ConfigFile::logs_dir()));
    }
}
