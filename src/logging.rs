use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Initializes console logging, plus daily-rotated JSON logs under `log_dir`
/// when one is given. Keep the returned guard alive until exit so file logs
/// are flushed.
pub fn init_logging(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
        .add_directive(
            "food_facts_cleaner=info"
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        );

    let console_layer = fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(dir, "cleaner.log");
                let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);
                (
                    Some(fmt::layer().json().with_writer(non_blocking_writer)),
                    Some(guard),
                )
            }
            Err(e) => {
                eprintln!("Could not create log directory '{}': {}", dir.display(), e);
                (None, None)
            }
        },
        None => (None, None),
    };

    // try_init so tests and embedding applications may install their own subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    guard
}
