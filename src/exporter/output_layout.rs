use crate::error::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Replaces filesystem-forbidden characters with `_`.
///
/// Only `\ / : * ? " < > |` are rewritten; everything else, including
/// whitespace and non-ASCII, passes through unchanged, so the output always
/// has the same character length as the input.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|ch| match ch {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            ch => ch,
        })
        .collect()
}

/// Derives and creates the output locations of a batch run: the export root,
/// one timestamped folder per workbook, and each workbook's log file.
pub struct OutputLayout {
    root: PathBuf,
    date_format: String,
}

impl OutputLayout {
    /// Resolves the export root and creates it if absent.
    ///
    /// An explicit root wins; otherwise the root is `csv-export` inside a
    /// directory source, or next to a file source.
    pub fn resolve(source: &Path, explicit_root: Option<&Path>, date_format: &str) -> Result<Self> {
        let root = match explicit_root {
            Some(root) => root.to_path_buf(),
            None if source.is_dir() => source.join("csv-export"),
            None => source
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("csv-export"),
        };

        fs::create_dir_all(&root)?;
        let root = fs::canonicalize(&root)?;

        Ok(Self {
            root,
            date_format: date_format.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates `<root>/<sanitized stem>_<now>` for one workbook.
    ///
    /// The timestamp is captured here, at call time, so two workbooks with
    /// the same stem collide only when processed within the same formatted
    /// instant; in that case the folders merge and same-named CSVs
    /// overwrite.
    pub fn create_workbook_folder(&self, workbook_path: &Path) -> Result<PathBuf> {
        let folder = self
            .root
            .join(format!("{}_{}", self.workbook_base(workbook_path), self.now()));
        fs::create_dir_all(&folder)?;
        Ok(folder)
    }

    /// Picks the log file location for one workbook: a timestamped file in
    /// the log root when one is configured (created as needed), otherwise
    /// `export.log` inside the workbook's own export folder.
    pub fn log_file_for(
        &self,
        workbook_path: &Path,
        log_root: Option<&Path>,
        output_folder: &Path,
    ) -> Result<PathBuf> {
        match log_root {
            Some(log_root) => {
                fs::create_dir_all(log_root)?;
                Ok(log_root.join(format!(
                    "{}_{}.log",
                    self.workbook_base(workbook_path),
                    self.now()
                )))
            }
            None => Ok(output_folder.join("export.log")),
        }
    }

    fn workbook_base(&self, workbook_path: &Path) -> String {
        let stem = workbook_path
            .file_stem()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        sanitize_name(&stem)
    }

    fn now(&self) -> String {
        Local::now().format(&self.date_format).to_string()
    }
}
