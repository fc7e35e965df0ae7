//! Basic logger usage example
//!
//! Demonstrates instance loggers, the default logger, levels and the JSON
//! output format.
//!
//! Run with: cargo run --example basic_usage

use clog::prelude::*;
use clog::{debug, error, info, warn};

fn main() -> Result<()> {
    println!("=== clog - Basic Usage Example ===\n");

    // Instance logger writing to stderr
    let logger = Logger::builder()
        .prefix("demo")
        .color(true)
        .diffs(true)
        .build();

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message")?;
    info!(logger, "This is an info message")?;
    warn!(logger, "This is a warning message")?;
    error!(logger, "This is an error message")?;

    println!("\n2. Raising the threshold to WARN:");
    logger.set_level(LogLevel::Warn);
    debug!(logger, "Debug message (hidden)")?;
    info!(logger, "Info message (hidden)")?;
    warn!(logger, "Warning message (visible)")?;

    println!("\n3. JSON output with a trace id and pid:");
    let json = logger.copy();
    json.set_level(LogLevel::Debug)
        .disable_color()
        .set_trace_id("0d01be9f-f965-4398-a046-1e83322cb243")
        .enable_pid()
        .set_output_format(OutputFormat::Json);
    info!(json, "user {} logged in", "alice")?;

    println!("\n4. The default logger:");
    clog::set_prefix("default").set_print_source(PrintSource::FullPath);
    info!("served {} requests", 3)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
