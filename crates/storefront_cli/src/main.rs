//! `storefront` server binary.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Start logging, open the store, and serve the API until Ctrl-C.

use clap::Parser;
use log::info;
use std::error::Error;
use std::path::PathBuf;
use storefront_core::{default_log_level, init_console_logging, init_logging, Database};
use storefront_http::{serve, AppState, ServerConfig};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Employee, product and customer REST API")]
struct Args {
    /// SQLite database file; an in-memory store is used when omitted.
    #[arg(long, env = "STOREFRONT_DB_PATH")]
    db_path: Option<PathBuf>,

    #[arg(long, env = "STOREFRONT_HOST", default_value = "127.0.0.1")]
    host: String,

    #[arg(long, env = "STOREFRONT_PORT", default_value_t = 8080)]
    port: u16,

    /// One of trace, debug, info, warn, error.
    #[arg(long, env = "STOREFRONT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise.
    #[arg(long, env = "STOREFRONT_LOG_DIR")]
    log_dir: Option<String>,

    /// Length cap applied to every text field of a request.
    #[arg(long, env = "STOREFRONT_MAX_TEXT_LEN", default_value_t = 255)]
    max_text_len: usize,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            max_text_len: self.max_text_len,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = args.log_level.as_deref().unwrap_or(default_log_level());
    match args.log_dir.as_deref() {
        Some(dir) => init_logging(level, dir)?,
        None => init_console_logging(level)?,
    }

    let db = match &args.db_path {
        Some(path) => {
            info!(
                "event=store_select module=cli status=ok store=file path={}",
                path.display()
            );
            Database::open(path)?
        }
        None => {
            info!("event=store_select module=cli status=ok store=memory");
            Database::open_in_memory()?
        }
    };

    let config = args.server_config();
    let state = AppState::sqlite(db, config.validator());
    serve(&config, state).await?;
    Ok(())
}
