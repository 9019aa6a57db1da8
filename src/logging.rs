use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "info,nihongo_srs=info";
const LOG_FILE_PREFIX: &str = "nihongo.log";

/// Where and how verbosely the host application wants crate events written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub directives: String,
    /// Daily-rotated file output in this directory, on top of stdout.
    pub file_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directives: DEFAULT_DIRECTIVES.to_string(),
            file_dir: None,
        }
    }
}

impl LogConfig {
    /// `RUST_LOG` for directives; `NIHONGO_LOG_DIR` turns on the file sink.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            directives: env_string("RUST_LOG").unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string()),
            file_dir: env_string("NIHONGO_LOG_DIR").map(PathBuf::from),
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.directives).unwrap_or_else(|err| {
            eprintln!("invalid log directives {:?}: {err}", self.directives);
            EnvFilter::new(DEFAULT_DIRECTIVES)
        })
    }
}

/// Result of [`init_tracing`]. Hold it for the life of the process: dropping
/// it stops the background file writer.
#[derive(Default)]
pub struct LogGuard {
    installed: bool,
    file: Option<WorkerGuard>,
}

impl LogGuard {
    /// False when another subscriber was already global.
    pub fn installed(&self) -> bool {
        self.installed
    }

    pub fn writes_file(&self) -> bool {
        self.file.is_some()
    }
}

pub fn init_tracing(config: &LogConfig) -> LogGuard {
    let (file_layer, file_guard) = match file_writer(config) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(config.filter())
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .try_init()
        .is_ok();

    LogGuard {
        installed,
        file: file_guard.filter(|_| installed),
    }
}

fn file_writer(
    config: &LogConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = config.file_dir.as_ref()?;
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!("log directory {} unusable, file logging off: {err}", dir.display());
        return None;
    }
    Some(tracing_appender::non_blocking(
        tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX),
    ))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
