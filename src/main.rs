// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use translitner::app_config::{self, Config, LogLevel};
use translitner::providers::GeminiOracle;
use translitner::TransliterationService;

/// translitner - AI transliteration and named-entity API
///
/// Serves an HTTP API that transliterates text and Word documents, and
/// extracts named entities with their transliterations, using a Gemini model.
#[derive(Parser, Debug)]
#[command(name = "translitner")]
#[command(version)]
#[command(about = "AI-powered transliteration and NER API server")]
#[command(long_about = "translitner serves an HTTP API that forwards text to a Gemini model for
script transliteration and named-entity extraction.

EXAMPLES:
    translitner                                   # Settings from environment / .env
    translitner --output-lang Assamese            # Override the target script
    translitner --bind 127.0.0.1:9000 -l debug    # Local only, verbose logging

CONFIGURATION:
    Every option can be given as a flag or as the environment variable shown
    in --help. A .env file in the working directory is loaded first.
    GEMINI_API_KEY, INPUT_LANG, OUTPUT_LANG and LLM_MODEL are required.")]
struct ServerArgs {
    /// API key for the Gemini API
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Source language or script (name or ISO code)
    #[arg(long, env = "INPUT_LANG")]
    input_lang: String,

    /// Target language or script (name or ISO code)
    #[arg(long, env = "OUTPUT_LANG")]
    output_lang: String,

    /// Model identifier, e.g. gemini-1.5-flash
    #[arg(long, env = "LLM_MODEL")]
    model: String,

    /// Gemini API endpoint
    #[arg(long, env = "GEMINI_ENDPOINT", default_value_t = app_config::default_endpoint())]
    endpoint: String,

    /// Address to listen on
    #[arg(long, env = "BIND_ADDRESS", default_value_t = app_config::default_bind_address())]
    bind: String,

    /// Timeout for a single model call, in seconds
    #[arg(long, env = "LLM_TIMEOUT_SECS", default_value_t = app_config::default_timeout_secs())]
    timeout_secs: u64,

    /// Sampling temperature (0.0 - 2.0); model default when unset
    #[arg(long, env = "LLM_TEMPERATURE")]
    temperature: Option<f32>,

    /// Maximum request body size in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = app_config::default_max_upload_bytes())]
    max_upload_bytes: usize,

    /// Set logging level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: LogLevel,
}

impl From<ServerArgs> for Config {
    fn from(args: ServerArgs) -> Self {
        Config {
            endpoint: args.endpoint,
            bind_address: args.bind,
            timeout_secs: args.timeout_secs,
            temperature: args.temperature,
            max_upload_bytes: args.max_upload_bytes,
            log_level: args.log_level,
            ..Config::new(args.api_key, args.input_lang, args.output_lang, args.model)
        }
    }
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn colour_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::colour_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logger starts permissive; the configured level is applied once known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    // A missing .env file is fine, settings may come from the environment
    dotenv::dotenv().ok();

    let config: Config = ServerArgs::parse().into();
    log::set_max_level(config.log_level.to_level_filter());

    config.validate()
        .context("Configuration validation failed")?;

    let oracle = GeminiOracle::new(
        config.api_key.clone(),
        config.model.clone(),
        config.endpoint.clone(),
        Duration::from_secs(config.timeout_secs),
    )
    .with_temperature(config.temperature);

    let service = TransliterationService::from_config(&config, Arc::new(oracle))
        .context("Invalid language settings")?;

    info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    translitner::server::serve(&config, service).await
}
