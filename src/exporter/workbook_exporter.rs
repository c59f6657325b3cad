use crate::error::{Result, XlsheetError};
use crate::exporter::output_layout::sanitize_name;
use crate::exporter::sheet_filter::{SheetDecision, SheetFilter};
use crate::ui::WorkbookLogger;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// What one workbook export produced.
///
/// `sheets_exported` and `csv_files` are the same length and positionally
/// correspond; both follow the workbook's native sheet order.
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub workbook_path: PathBuf,
    pub output_folder: PathBuf,
    pub sheets_exported: Vec<String>,
    pub csv_files: Vec<PathBuf>,
}

/// Converts one workbook into per-sheet CSV files via calamine.
pub struct WorkbookExporter {
    filter: SheetFilter,
}

impl WorkbookExporter {
    pub fn new(filter: SheetFilter) -> Self {
        Self { filter }
    }

    /// Exports every sheet of `workbook_path` that passes the filter into
    /// `output_folder`, one `<sanitized name>.csv` per sheet.
    ///
    /// The whole workbook is read up front; a read failure produces no
    /// partial result. Sheet writes are not retried, so the first write
    /// error aborts the remaining sheets of this workbook.
    pub fn export(
        &self,
        workbook_path: &Path,
        output_folder: &Path,
        logger: &mut WorkbookLogger,
    ) -> Result<ExportResult> {
        logger.info(&format!(
            "Starting workbook: {}",
            workbook_path.display()
        ))?;

        let mut workbook: Xlsx<_> =
            open_workbook(workbook_path).map_err(|e| XlsheetError::WorkbookRead {
                path: workbook_path.display().to_string(),
                source: e,
            })?;

        let sheet_names = workbook.sheet_names().to_vec();
        logger.info(&format!("Workbook has {} sheet(s).", sheet_names.len()))?;

        let mut sheets_exported = Vec::new();
        let mut csv_files = Vec::new();

        for name in sheet_names {
            match self.filter.decide(&name) {
                SheetDecision::NotIncluded => {
                    logger.info(&format!(
                        "Skipping sheet '{}' (not in include list).",
                        name
                    ))?;
                    continue;
                }
                SheetDecision::Excluded => {
                    logger.info(&format!("Skipping sheet '{}' (in exclude list).", name))?;
                    continue;
                }
                SheetDecision::Export => {}
            }

            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| XlsheetError::WorkbookRead {
                    path: workbook_path.display().to_string(),
                    source: e,
                })?;

            let csv_path = output_folder.join(format!("{}.csv", sanitize_name(&name)));
            logger.info(&format!(
                "Exporting sheet '{}' to '{}' (rows={}, cols={}).",
                name,
                csv_path.display(),
                range.height(),
                range.width()
            ))?;

            write_sheet_csv(&range, &csv_path)?;

            sheets_exported.push(name);
            csv_files.push(csv_path);
        }

        logger.info(&format!(
            "Completed workbook: {} (sheets exported: {})",
            workbook_path.display(),
            csv_files.len()
        ))?;

        Ok(ExportResult {
            workbook_path: workbook_path.to_path_buf(),
            output_folder: output_folder.to_path_buf(),
            sheets_exported,
            csv_files,
        })
    }
}

fn write_sheet_csv(range: &Range<Data>, csv_path: &Path) -> Result<()> {
    let to_write_error = |e: csv::Error| XlsheetError::CsvWrite {
        path: csv_path.display().to_string(),
        source: e,
    };

    let mut writer = csv::Writer::from_path(csv_path).map_err(to_write_error)?;

    // The sheet's first row is the header row; cells serialize through
    // calamine's Display so empty cells become empty fields.
    for row in range.rows() {
        let record: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writer.write_record(&record).map_err(to_write_error)?;
    }

    writer.flush()?;
    Ok(())
}
