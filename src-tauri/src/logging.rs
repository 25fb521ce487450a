use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{DESKTOP_LOG_FILE, SHELL_ROOT_DIR_NAME, SHELL_ROOT_ENV};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogCategory {
    Startup,
    Desktop,
    Shutdown,
    Bridge,
}

impl LogCategory {
    fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Desktop => "desktop",
            Self::Shutdown => "shutdown",
            Self::Bridge => "bridge",
        }
    }
}

pub(crate) fn default_shell_root_dir() -> Option<PathBuf> {
    if let Ok(root) = env::var(SHELL_ROOT_ENV) {
        let path = PathBuf::from(root.trim());
        if !path.as_os_str().is_empty() {
            return Some(path);
        }
    }

    home::home_dir().map(|home| home.join(SHELL_ROOT_DIR_NAME))
}

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => env::temp_dir().join(SHELL_ROOT_DIR_NAME).join(file_name),
    }
}

fn format_log_line(category: LogCategory, message: &str) -> String {
    format!(
        "[{}] [{}] {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category.as_str(),
        message
    )
}

fn write_log_line(path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    writeln!(file, "{line}")
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

fn append_log(category: LogCategory, message: &str) {
    let line = format_log_line(category, message);
    eprintln!("{line}");

    let path = resolve_desktop_log_path(default_shell_root_dir(), DESKTOP_LOG_FILE);
    if let Err(error) = write_log_line(&path, &line) {
        eprintln!("{error}");
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_log(LogCategory::Startup, message);
}

pub(crate) fn append_desktop_log(message: &str) {
    append_log(LogCategory::Desktop, message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_log(LogCategory::Shutdown, message);
}

pub(crate) fn append_bridge_log(message: &str) {
    append_log(LogCategory::Bridge, message);
}
