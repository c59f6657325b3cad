use crate::config::DiscoveryConfig;
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Locates the workbook files a batch run should process.
pub struct WorkbookScanner {
    recurse: bool,
}

impl WorkbookScanner {
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            recurse: config.recurse,
        }
    }

    /// Returns the workbooks under `source` in processing order.
    ///
    /// A single file is returned as-is regardless of its extension. For a
    /// directory, candidates are `.xlsx` files (case-insensitive), skipping
    /// editor lock files (`~$` prefix); `recurse` decides whether nested
    /// directories are scanned. The caller is expected to have checked that
    /// `source` exists. The result is sorted by full path so processing
    /// order is deterministic across runs.
    pub fn discover(&self, source: &Path) -> Result<Vec<PathBuf>> {
        if source.is_file() {
            return Ok(vec![source.to_path_buf()]);
        }

        let max_depth = if self.recurse { usize::MAX } else { 1 };
        let mut workbooks = Vec::new();

        let walker = WalkDir::new(source)
            .max_depth(max_depth)
            .follow_links(false);

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                if is_workbook_name(name) {
                    workbooks.push(entry.into_path());
                }
            }
        }

        workbooks.sort();
        Ok(workbooks)
    }
}

fn is_workbook_name(name: &str) -> bool {
    // ~$Foo.xlsx is the lock file editors keep next to an open workbook
    !name.starts_with("~$") && name.to_ascii_lowercase().ends_with(".xlsx")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scanner(recurse: bool) -> WorkbookScanner {
        WorkbookScanner::new(&DiscoveryConfig { recurse })
    }

    #[test]
    fn test_workbook_name_matching() {
        assert!(is_workbook_name("report.xlsx"));
        assert!(is_workbook_name("REPORT.XLSX"));
        assert!(is_workbook_name("report.Xlsx"));
        assert!(!is_workbook_name("report.xls"));
        assert!(!is_workbook_name("report.csv"));
        assert!(!is_workbook_name("~$report.xlsx"));
        assert!(!is_workbook_name("xlsx"));
    }

    #[test]
    fn test_single_file_returned_regardless_of_extension() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.bin");
        fs::write(&file, "not a workbook").unwrap();

        let found = scanner(false).discover(&file).unwrap();
        assert_eq!(found, vec![file]);
    }

    #[test]
    fn test_direct_children_only_without_recurse() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.xlsx"), "").unwrap();
        fs::write(root.join("a.XLSX"), "").unwrap();
        fs::write(root.join("~$a.xlsx"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();

        let nested = root.join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.xlsx"), "").unwrap();

        let found = scanner(false).discover(root).unwrap();
        assert_eq!(found, vec![root.join("a.XLSX"), root.join("b.xlsx")]);
    }

    #[test]
    fn test_recurse_includes_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("top.xlsx"), "").unwrap();

        let nested = root.join("sub").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("deep.xlsx"), "").unwrap();
        fs::write(nested.join("~$deep.xlsx"), "").unwrap();

        let found = scanner(true).discover(root).unwrap();
        assert_eq!(found, vec![nested.join("deep.xlsx"), root.join("top.xlsx")]);
    }

    #[test]
    fn test_empty_directory_yields_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let found = scanner(true).discover(temp_dir.path()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_result_sorted_by_full_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for name in ["zz.xlsx", "aa.xlsx", "mm.xlsx"] {
            fs::write(root.join(name), "").unwrap();
        }

        let found = scanner(false).discover(root).unwrap();
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
        assert_eq!(found[0], root.join("aa.xlsx"));
    }
}
