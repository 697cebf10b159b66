//! Tracing setup for the desktop shell.
//!
//! Console output respects `RUST_LOG` (default `notion_table=info`), e.g.
//! `RUST_LOG=notion_table::usecase=debug` to watch edit and resize
//! transitions. When a log directory is available, a daily-rolling file
//! layer records everything at debug level.

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE_PREFIX: &str = "notion-table.log";

pub fn init(logs_dir: Option<&Path>) {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notion_table=info"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = logs_dir.map(|dir| {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("notion_table=debug"))
    });

    if let Err(err) = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: tracing already initialized: {err}");
    }
}
