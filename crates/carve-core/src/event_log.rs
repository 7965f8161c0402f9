//! Session event log.
//!
//! Append-only, line-oriented: one timestamped line per session action
//! (start, stop, open, save, new file). The log file name carries the
//! session start time so concurrent sessions never share a file. Write
//! failures propagate to the caller.

use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// An open, append-only session log file.
#[derive(Debug)]
pub struct EventLog {
    path: PathBuf,
    file: File,
}

impl EventLog {
    /// Creates the log file for a session starting now, inside `dir`.
    pub fn create(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let started = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("carve-{started}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self { path, file })
    }

    /// Appends one timestamped event line.
    pub fn record(&mut self, event: &str) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(self.file, "[{timestamp}] {event}")
    }

    /// Returns the log file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_includes_session_start() {
        let dir = tempfile::tempdir().unwrap();
        let log = EventLog::create(dir.path()).unwrap();

        let name = log.path().file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("carve-"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_record_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = EventLog::create(dir.path()).unwrap();

        log.record("Application started").unwrap();
        log.record("Opened file: notes.c").unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("Application started"));
        assert!(lines[1].ends_with("Opened file: notes.c"));
        // "[YYYY-MM-DD HH:MM:SS] " prefix is 22 characters.
        assert_eq!(&lines[0][21..22], " ");
        assert_eq!(&lines[0][20..21], "]");
    }
}
