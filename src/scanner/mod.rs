pub mod workbook_scanner;

pub use workbook_scanner::WorkbookScanner;
