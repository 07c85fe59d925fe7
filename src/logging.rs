use std::fs::{create_dir_all, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// Console output by default; with `save_logs` set, log lines go to a file
/// instead, either rewriting the configured path or stamping a fresh one
/// per run.
pub fn setup_logging(cfg: &LoggingConfig) -> Result<()> {
    let level = cfg
        .level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    if !cfg.save_logs {
        fmt().with_env_filter(env_filter).init();
        return Ok(());
    }

    if let Some(dir) = Path::new(&cfg.log_file_path).parent() {
        create_dir_all(dir).context("could not create log directory")?;
    }

    let log_file_path = if cfg.rewrite_last_logs {
        cfg.log_file_path.clone()
    } else {
        let timestamp = Utc::now().format("%Y-%m-%d_%H-%M-%S");
        format!(
            "{}-{}.log",
            cfg.log_file_path.trim_end_matches(".log"),
            timestamp
        )
    };

    let file = File::create(&log_file_path)
        .with_context(|| format!("could not create log file {log_file_path}"))?;
    let writer = move || BufWriter::new(file.try_clone().expect("could not clone log file handle"));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(())
}
