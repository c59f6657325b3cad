use thiserror::Error;

#[derive(Error, Debug)]
pub enum XlsheetError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source path not found: {path}")]
    SourceNotFound { path: String },

    #[error("No .xlsx files found under: {path}")]
    NoWorkbooksFound { path: String },

    #[error("Unsupported backend: {name}")]
    UnsupportedBackend { name: String },

    #[error("Failed to read workbook {path}: {source}")]
    WorkbookRead {
        path: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("Failed to write CSV {path}: {source}")]
    CsvWrite {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for XlsheetError {
    fn user_message(&self) -> String {
        match self {
            XlsheetError::SourceNotFound { path } => {
                format!("Source path not found: {}", path)
            }
            XlsheetError::NoWorkbooksFound { path } => {
                format!("No .xlsx files found under: {}", path)
            }
            XlsheetError::UnsupportedBackend { name } => {
                format!("Unsupported backend: {}", name)
            }
            XlsheetError::WorkbookRead { path, source } => {
                format!("Failed to read workbook {}: {}", path, source)
            }
            XlsheetError::CsvWrite { path, source } => {
                format!("Failed to write CSV {}: {}", path, source)
            }
            XlsheetError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            XlsheetError::SourceNotFound { .. } => Some(
                "Check the path for typos. Pass either a single .xlsx file or a directory containing .xlsx files.".to_string(),
            ),
            XlsheetError::NoWorkbooksFound { .. } => Some(
                "Only files ending in .xlsx are picked up, and editor lock files (names starting with ~$) are skipped. Use --recurse to scan subdirectories.".to_string(),
            ),
            XlsheetError::UnsupportedBackend { .. } => Some(
                "Run with --backend calamine, currently the only implemented backend.".to_string(),
            ),
            XlsheetError::WorkbookRead { .. } => Some(
                "Verify the file is a valid .xlsx workbook and is not open in another program.".to_string(),
            ),
            XlsheetError::CsvWrite { .. } => Some(
                "Ensure the output directory is writable and has enough free space.".to_string(),
            ),
            XlsheetError::Config { .. } => Some(
                "Check your configuration file syntax and the --date-format pattern (chrono strftime specifiers).".to_string(),
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for XlsheetError {
    fn from(error: toml::de::Error) -> Self {
        XlsheetError::Config {
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, XlsheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = XlsheetError::SourceNotFound {
            path: "/missing/dir".to_string(),
        };
        assert!(error.user_message().contains("Source path not found"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = XlsheetError::from(io_error);
        assert!(matches!(error, XlsheetError::Io(_)));
        assert!(error.suggestion().is_none());
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("not [valid").unwrap_err();
        let error = XlsheetError::from(toml_error);
        assert!(matches!(error, XlsheetError::Config { .. }));
    }
}
