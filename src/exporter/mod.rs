pub mod output_layout;
pub mod sheet_filter;
pub mod workbook_exporter;

pub use output_layout::{sanitize_name, OutputLayout};
pub use sheet_filter::{SheetDecision, SheetFilter};
pub use workbook_exporter::{ExportResult, WorkbookExporter};
