//! Basic logger usage example
//!
//! Demonstrates severity gating, request contexts and chunking of long
//! messages, writing to stdout.
//!
//! Run with: cargo run --example basic_usage

use chunked_logger::prelude::*;
use chunked_logger::{debug, error, info, warn};

fn main() -> Result<()> {
    println!("=== Chunked Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .module_name("demo")
        .min_level(LogLevel::Debug)
        .environment("local")
        .max_chunk_length(40)
        .build();

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    println!("\n2. Attaching a trace id:");
    let ctx = RequestContext::new().with_trace_id("req-0001");
    let ctx_ref = logger.info_return_ctx(Some(&ctx), &[Arg::from("request accepted")]);
    logger.warn_ctx(ctx_ref, &[Arg::from("upstream slow, ms:"), Arg::from(840)]);

    println!("\n3. A long message split into chunks:");
    let long = "lorem ipsum dolor sit amet ".repeat(5);
    info!(logger, long.as_str());

    println!("\n4. Measuring latency only when debug is on:");
    let start = logger.now();
    std::thread::sleep(std::time::Duration::from_millis(5));
    info!(logger, "took", Arg::debug(&logger.elapsed_since(start)));

    println!("\n5. Errors are never suppressed:");
    let quiet = Logger::builder().module_name("quiet").min_level(LogLevel::Error).build();
    info!(quiet, "hidden");
    error!(quiet, "visible");

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
