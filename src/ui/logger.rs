use crate::error::Result;
use chrono::Local;
use console::{style, Term};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Info,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Error => "ERROR",
        }
    }
}

/// Progress sink scoped to one workbook.
///
/// Every line goes to the console error stream and, when a log file is
/// configured, identically to that file (opened append-or-create, ancestor
/// directories created). Each batch iteration opens a fresh logger, so one
/// workbook's destinations never leak into the next; dropping the value
/// closes the file handle.
pub struct WorkbookLogger {
    file: Option<fs::File>,
    use_colors: bool,
    quiet: bool,
}

impl WorkbookLogger {
    pub fn open(log_file: Option<&Path>, quiet: bool) -> Result<Self> {
        let file = match log_file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                Some(
                    OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(path)?,
                )
            }
            None => None,
        };

        let use_colors = Term::stderr().features().colors_supported() && !quiet;

        Ok(Self {
            file,
            use_colors,
            quiet,
        })
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.emit(Level::Info, message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.emit(Level::Error, message)
    }

    fn emit(&mut self, level: Level, message: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

        if !self.quiet || level == Level::Error {
            if self.use_colors {
                let tag = match level {
                    Level::Info => style(level.tag()).green(),
                    Level::Error => style(level.tag()).red().bold(),
                };
                eprintln!("{} [{}] {}", timestamp, tag, message);
            } else {
                eprintln!("{} [{}] {}", timestamp, level.tag(), message);
            }
        }

        if let Some(file) = &mut self.file {
            writeln!(file, "{} [{}] {}", timestamp, level.tag(), message)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_console_only_logger() {
        let mut logger = WorkbookLogger::open(None, true).unwrap();
        logger.info("no file destination").unwrap();
        assert!(logger.file.is_none());
    }

    #[test]
    fn test_lines_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("export.log");

        let mut logger = WorkbookLogger::open(Some(&log_path), true).unwrap();
        logger.info("Starting workbook: book.xlsx").unwrap();
        logger.error("something went wrong").unwrap();
        drop(logger);

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[INFO] Starting workbook: book.xlsx"));
        assert!(lines[1].contains("[ERROR] something went wrong"));
    }

    #[test]
    fn test_missing_ancestors_created() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("deep").join("run.log");

        let mut logger = WorkbookLogger::open(Some(&log_path), true).unwrap();
        logger.info("hello").unwrap();
        drop(logger);

        assert!(log_path.exists());
    }

    #[test]
    fn test_reopening_appends() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("export.log");

        let mut first = WorkbookLogger::open(Some(&log_path), true).unwrap();
        first.info("first run").unwrap();
        drop(first);

        let mut second = WorkbookLogger::open(Some(&log_path), true).unwrap();
        second.info("second run").unwrap();
        drop(second);

        let content = fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("first run"));
        assert!(content.contains("second run"));
    }
}
