use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "xlsheet2csv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export XLSX worksheets to per-sheet CSV files")]
#[command(
    long_about = "xlsheet2csv exports every worksheet of an XLSX file (or of all XLSX files \
                  in a folder) into individual CSV files, one timestamped output folder per \
                  workbook."
)]
#[command(after_help = "EXAMPLES:\n  \
    xlsheet2csv report.xlsx\n  \
    xlsheet2csv ./workbooks --recurse -o ./exports\n  \
    xlsheet2csv report.xlsx --include Summary Data --exclude Scratch\n  \
    xlsheet2csv ./workbooks --log-root ./logs --date-format %Y%m%d_%H%M%S")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to a single XLSX file or a folder containing XLSX files
    #[arg(required_unless_present = "generate_config")]
    pub source_path: Option<PathBuf>,

    /// Destination root folder for exports (defaults to csv-export next to the source)
    #[arg(short, long)]
    pub output_root: Option<PathBuf>,

    /// Workbook-reading backend
    #[arg(long, value_enum, default_value_t = Backend::Calamine)]
    pub backend: Backend,

    /// Recurse into subdirectories when the source is a folder
    #[arg(long)]
    pub recurse: bool,

    /// Timestamp format for export folder names (strftime pattern)
    #[arg(long, help = "Timestamp format for export folder names, e.g. %d-%m-%Y_%H%M")]
    pub date_format: Option<String>,

    /// Sheet names to include (all sheets when omitted)
    #[arg(long, num_args = 0..)]
    pub include: Option<Vec<String>>,

    /// Sheet names to exclude
    #[arg(long, num_args = 0..)]
    pub exclude: Option<Vec<String>>,

    /// Root directory for log files instead of each workbook's export folder
    #[arg(long)]
    pub log_root: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Quiet mode (suppress console progress lines)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

/// Workbook-reading backends. A closed set so a future alternate reader is an
/// additive variant; anything else is rejected by clap at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// calamine-based XLSX reader
    Calamine,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Calamine => "calamine",
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_recurse(self.recurse)
            .with_output_root(self.output_root.clone())
            .with_log_root(self.log_root.clone())
            .with_date_format(self.date_format.clone())
            .with_include(self.include.clone())
            .with_exclude(self.exclude.clone())
    }
}
