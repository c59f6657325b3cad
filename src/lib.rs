pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Backend, Cli};
pub use config::{CliOverrides, Config, DiscoveryConfig, OutputConfig, SheetConfig};
pub use error::{Result, UserFriendlyError, XlsheetError};

// Core functionality re-exports
pub use exporter::{sanitize_name, ExportResult, OutputLayout, SheetFilter, WorkbookExporter};
pub use scanner::WorkbookScanner;
pub use ui::WorkbookLogger;

use std::fs;
use std::path::Path;

/// Drives a full batch run: source validation, output-root resolution,
/// workbook discovery, and one export per workbook, strictly in order.
pub struct BatchRunner {
    config: Config,
    backend: Backend,
    quiet: bool,
}

impl BatchRunner {
    pub fn new(config: Config, backend: Backend, quiet: bool) -> Self {
        Self {
            config,
            backend,
            quiet,
        }
    }

    /// Create a BatchRunner from CLI arguments.
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        Ok(Self::new(config, cli_args.backend, cli_args.quiet))
    }

    /// Processes every workbook under `source`, sequentially and in sorted
    /// order, returning the per-workbook results in processing order.
    ///
    /// Fails before touching the filesystem when `source` does not exist,
    /// and right after root resolution when discovery comes back empty, so
    /// an empty run leaves nothing behind but the export root itself. The
    /// first workbook read or write failure aborts the remaining workbooks;
    /// everything already logged stays logged.
    pub fn run(&self, source: &Path) -> Result<Vec<ExportResult>> {
        if !source.exists() {
            return Err(XlsheetError::SourceNotFound {
                path: source.display().to_string(),
            });
        }
        let source = fs::canonicalize(source)?;

        let layout = OutputLayout::resolve(
            &source,
            self.config.output.output_root.as_deref(),
            &self.config.output.date_format,
        )?;

        let scanner = WorkbookScanner::new(&self.config.discovery);
        let workbooks = scanner.discover(&source)?;
        if workbooks.is_empty() {
            return Err(XlsheetError::NoWorkbooksFound {
                path: source.display().to_string(),
            });
        }

        let filter = SheetFilter::new(&self.config.sheets);
        let exporter = match self.backend {
            Backend::Calamine => WorkbookExporter::new(filter),
        };

        let total = workbooks.len();
        let mut results = Vec::with_capacity(total);

        for (index, workbook) in workbooks.iter().enumerate() {
            let output_folder = layout.create_workbook_folder(workbook)?;
            let log_file = layout.log_file_for(
                workbook,
                self.config.output.log_root.as_deref(),
                &output_folder,
            )?;

            let mut logger = WorkbookLogger::open(Some(&log_file), self.quiet)?;
            logger.info(&format!(
                "[{}/{}] Processing workbook '{}' (backend: {})",
                index + 1,
                total,
                workbook.display(),
                self.backend.name()
            ))?;

            let result = exporter.export(workbook, &output_folder, &mut logger)?;
            results.push(result);
        }

        Ok(results)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Generate a sample configuration file.
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config).map_err(XlsheetError::Io)?;
        Ok(())
    }
}
