use crate::formats::load_election;
use crate::reports::console::print_report;
use crate::reports::generate_report;
use crate::tabulator::apportion;
use crate::util::{file_digest, write_serialized};
use colored::*;
use instant::Instant;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub seats: Option<u32>,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub trace: bool,
}

/// Apportion the council seats for a snapshot and emit the report.
pub fn report(input_path: &Path, options: &ReportOptions) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();

    let loaded = load_election(input_path, options.seats)?;
    let digest = file_digest(input_path)?;

    let result = apportion(&loaded.input);
    let report = generate_report(&loaded.input, &result, Some(digest));

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "report generated for {}",
        input_path.display()
    );

    if let Some(output) = &options.output {
        write_serialized(output, &report)?;
        eprintln!(
            "✅ Report written to {}",
            output.display().to_string().bright_green()
        );
    }

    if options.json {
        println!("{}", report.to_json()?);
    } else if options.output.is_none() {
        print_report(&report, options.trace);
    }

    Ok(())
}
