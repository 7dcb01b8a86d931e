//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `memento_warc` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output (response body to stdout, or WARC records to a file)

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use memento_warc::{
    init_logger_with, init_redirect_session, init_session, Config, MementoApi, WarcRecordBuilder,
};

fn run(config: &Config) -> Result<()> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let proxy = config.proxy.as_deref();
    let session = init_session(timeout, proxy).context("Failed to initialize HTTP session")?;
    let redirect_session = init_redirect_session(timeout, proxy)
        .context("Failed to initialize redirect-disabled HTTP session")?;
    let api = MementoApi::with_collaborators(
        &config.api_url,
        session,
        redirect_session,
        WarcRecordBuilder::new(),
    )
    .context("Failed to initialize Memento API client")?
    .proxied(config.proxy.is_some());

    match &config.warc {
        Some(path) => {
            let records = api.load_url_warc(&config.url, config.timestamp, config.raw)?;
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            for record in &records {
                record.write_to(&mut writer)?;
            }
            writer.flush()?;
            println!("Wrote {} WARC records to {}", records.len(), path.display());
        }
        None => {
            let response = api.load_url(&config.url, config.timestamp, config.raw)?;
            let body = response.bytes().context("Failed to read response body")?;
            io::stdout().write_all(&body)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logger_with(config.log_level.clone().into()).context("Failed to initialize logger")?;

    if let Err(e) = run(&config) {
        eprintln!("memento_warc error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
