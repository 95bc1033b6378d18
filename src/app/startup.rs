//! Application startup: arguments, configuration, logging, then the stamper

use crate::app::cli::Args;
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::{effective_level, init_logging, reconfigure_logging};
use crate::stamper::Stamper;
use clap::Parser;

/// Stamping failed (repository, query, template or write error)
pub const EXIT_STAMP_FAILURE: i32 = 1;
/// Invalid arguments or configuration
pub const EXIT_USAGE: i32 = 2;

/// Parse the process arguments and run; returns the exit code
pub async fn startup() -> i32 {
    run(Args::parse()).await
}

/// Run with already parsed arguments; returns the exit code
pub async fn run(mut args: Args) -> i32 {
    // Configuration first, so its logging settings apply from the start
    match args.load_config_file().await {
        Ok(Some(config)) => args.apply_config(&config),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            return EXIT_USAGE;
        }
    }

    let use_color = args
        .color_override()
        .unwrap_or_else(|| std::io::IsTerminal::is_terminal(&std::io::stderr()));
    colored::control::set_override(use_color);

    let level = effective_level(args.log_level.as_deref(), args.verbosity());
    if let Err(e) = init_logging(
        Some(level),
        args.log_format.as_deref(),
        args.effective_log_file(),
        use_color,
    ) {
        // Already started by an earlier run in this process: only the level can change
        if reconfigure_logging(level).is_err() {
            eprintln!("Warning: logging unavailable: {}", e);
        }
    }

    log::debug!("Final arguments: {:#?}", args);

    if let Err(e) = args.validate() {
        log_error_with_context(&e, "Argument validation");
        return EXIT_USAGE;
    }

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            log::error!("FATAL: Cannot determine current directory: {}", e);
            return EXIT_STAMP_FAILURE;
        }
    };

    let config = args.stamp_config(&cwd);
    log::debug!("Stamp configuration: {:?}", config);

    match Stamper::new(config).run().await {
        Ok(report) => {
            if report.written.is_none() {
                print!("{}", report.content);
            }
            0
        }
        Err(e) => {
            log_error_with_context(&e, "Stamping version");
            EXIT_STAMP_FAILURE
        }
    }
}
