use clap::Parser;
use std::path::PathBuf;
use std::process;
use xlsheet2csv::{BatchRunner, Cli, UserFriendlyError, XlsheetError};

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    // Guarded by clap's required_unless_present
    let Some(source) = cli.source_path.clone() else {
        eprintln!("Missing source path");
        return 1;
    };

    let runner = match BatchRunner::from_cli(&cli) {
        Ok(runner) => runner,
        Err(e) => {
            print_error(&e);
            return 1;
        }
    };

    match runner.run(&source) {
        Ok(_) => 0,
        Err(e) => {
            print_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &XlsheetError) -> i32 {
    match error {
        // Bad invocation: nothing was attempted
        XlsheetError::SourceNotFound { .. }
        | XlsheetError::NoWorkbooksFound { .. }
        | XlsheetError::UnsupportedBackend { .. }
        | XlsheetError::Config { .. } => 1,
        // Export failures abort the batch mid-run
        XlsheetError::WorkbookRead { .. }
        | XlsheetError::CsvWrite { .. }
        | XlsheetError::Io(_) => 2,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("xlsheet2csv.toml"));

    match BatchRunner::generate_sample_config(&config_path) {
        Ok(()) => {
            println!(
                "Generated sample configuration file: {}",
                config_path.display()
            );
            println!("\nTo use this configuration:");
            println!(
                "  xlsheet2csv <source-path> --config {}",
                config_path.display()
            );
            0
        }
        Err(e) => {
            print_error(&e);
            1
        }
    }
}

fn print_error(error: &XlsheetError) {
    eprintln!("{}", error.user_message());
    if let Some(suggestion) = error.suggestion() {
        eprintln!("Suggestion: {}", suggestion);
    }
}
