use std::str::FromStr;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingSettings;
use crate::error::{Result, TweetqlError};

/// Initialize the logging system from the `[logging]` settings.
///
/// `RUST_LOG` wins over `level` when set. Resolver spans from the schema's
/// tracing extension only show once `level` is `debug` or finer.
///
/// The returned guard flushes the log file when dropped; keep it alive for
/// the life of the process.
pub fn init(settings: &LoggingSettings) -> Result<Option<WorkerGuard>> {
    let directives = filter_directives(&settings.level)?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = settings.file.as_deref() else {
        subscriber.init();
        return Ok(None);
    };

    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    std::fs::create_dir_all(dir)?;

    // Daily rotation, the file name becomes a prefix
    let file_appender = tracing_appender::rolling::daily(
        dir,
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("tweetql.log")),
    );
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();

    subscriber.with(file_layer).init();
    Ok(Some(guard))
}

/// Filter for our own events plus the resolver spans emitted by async-graphql.
fn filter_directives(level: &str) -> Result<String> {
    let filter = LevelFilter::from_str(level)
        .map_err(|_| TweetqlError::Config(format!("Unknown log level: {}", level)))?;

    let graphql = if filter >= LevelFilter::DEBUG {
        "info"
    } else {
        "warn"
    };
    Ok(format!(
        "tweetql={},async_graphql={}",
        level.to_ascii_lowercase(),
        graphql
    ))
}
