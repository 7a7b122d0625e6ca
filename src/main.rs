//! lepr - validate a LEPR chemistry upload workbook.
//!
//! Loads a workbook from a directory of per-sheet CSV files, runs one
//! validation pass and prints the finding log. Exits 0 when the upload
//! is clean, 1 when findings were reported, 2 on a configuration error
//! (missing sheet, unreadable files, bad layout).

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lepr_core::{FindingLog, SheetLayout, storage::load_workbook, validate_workbook};

fn print_usage() {
    eprintln!("Usage: lepr [OPTIONS] <WORKBOOK_DIR>");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <WORKBOOK_DIR>            Directory of per-sheet CSV files");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --layout-file <FILE>      Load template layout overrides from TOML");
    eprintln!("  --sheet <NAME>            Validate this sheet instead of the default");
    eprintln!("  -h, --help                Print help");
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    let mut workbook_dir: Option<PathBuf> = None;
    let mut layout_file: Option<PathBuf> = None;
    let mut sheet_name: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            "--layout-file" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --layout-file requires a file path");
                    return ExitCode::from(2);
                }
                layout_file = Some(PathBuf::from(&args[i]));
            }
            "--sheet" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --sheet requires a value");
                    return ExitCode::from(2);
                }
                sheet_name = Some(args[i].to_string());
            }
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                return ExitCode::from(2);
            }
            _ => {
                if workbook_dir.is_none() {
                    workbook_dir = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    return ExitCode::from(2);
                }
            }
        }
        i += 1;
    }

    let Some(workbook_dir) = workbook_dir else {
        print_usage();
        return ExitCode::from(2);
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lepr=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&workbook_dir, layout_file.as_deref(), sheet_name) {
        Ok(log) => {
            print!("{log}");
            if log.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(
    workbook_dir: &std::path::Path,
    layout_file: Option<&std::path::Path>,
    sheet_name: Option<String>,
) -> anyhow::Result<FindingLog> {
    let mut layout = match layout_file {
        Some(path) => SheetLayout::from_toml_file(path)
            .with_context(|| format!("loading layout from {}", path.display()))?,
        None => SheetLayout::default(),
    };
    if let Some(name) = sheet_name {
        layout.sheet_name = name;
    }

    let workbook = load_workbook(workbook_dir)
        .with_context(|| format!("loading workbook from {}", workbook_dir.display()))?;
    tracing::info!(sheets = workbook.n_sheets(), "workbook loaded");

    let log = validate_workbook(&workbook, &layout)?;
    tracing::info!(findings = log.len(), "validation pass complete");
    Ok(log)
}
