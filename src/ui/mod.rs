pub mod logger;

pub use logger::WorkbookLogger;
