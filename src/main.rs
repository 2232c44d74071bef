use anyhow::Result;
use colored::Colorize;
use human_panic::setup_panic;

use batch_renamer::prelude::*;

fn main() {
    setup_panic!();

    if let Err(error) = run() {
        let message = format!("Error: {error}");
        eprintln!("{}", format_message(&message, &message.red().to_string()));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = get_matches()?;
    let log_file = get_log_file(&matches);
    let verbose = get_verbose(&matches);

    let logger = Logger::new(&log_file, verbose)?;
    logger.info("Logger initiated");

    let job = build_job(&matches)?;
    let summary = process_folder(&job, &logger)?;

    print_summary(&summary, job.dry_run());

    Ok(())
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    let heading = if dry_run {
        "Planned operations (dry run):"
    } else {
        "Run summary:"
    };
    println!("{}", format_message(heading, &heading.bold().to_string()));
    println!("  Files processed:   {}", summary.processed);
    println!("  Files transferred: {}", summary.transferred);
    println!("  Skipped (filter):  {}", summary.skipped_filter);
    println!("  Skipped (exists):  {}", summary.skipped_conflicts);
    println!("  Missing sources:   {}", summary.missing_sources);
    println!("  Failures:          {}", summary.failures);
}
