use anyhow::{Context, Result};
use con_infrastructure::paths::ConPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber: stdout plus a daily-rolling file under the
/// logs directory. `RUST_LOG` overrides the default `info` level.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// lifetime of the app.
pub fn init_logging(paths: &ConPaths) -> Result<WorkerGuard> {
    let logs_dir = paths.logs_dir().context("Failed to resolve logs directory")?;
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "con-desktop.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("[Logging] Writing logs to {}", logs_dir.display());
    Ok(guard)
}
