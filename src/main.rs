mod api;
mod cli;
mod config;
mod session;
mod storage;
mod store;

use anyhow::Result;
use clap::Parser;
use std::cell::RefCell;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "flatmate", about = "Find roommates and housing from the terminal")]
pub struct Args {
    #[arg(long, help = "API base URL (overrides config and FLATMATE_API_BASE_URL)")]
    pub base_url: Option<String>,

    #[arg(long, help = "Config file path")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Directory holding the persisted session")]
    pub storage_dir: Option<PathBuf>,

    #[arg(long, help = "Keep the session in memory only")]
    pub ephemeral: bool,

    #[arg(short, long, help = "Verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Debug output (print HTTP requests)")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<cli::Command>,
}

fn init_logging(args: &Args) {
    let level = if args.debug {
        Level::DEBUG
    } else if args.verbose {
        Level::INFO
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(&args);

    let mut cfg = if let Some(config_path) = &args.config {
        let mut cfg = config::Config::load_from(config_path)?;
        cfg.apply_env();
        cfg
    } else {
        config::Config::load()?
    };

    if let Some(base_url) = &args.base_url {
        cfg.api.base_url = Some(base_url.clone());
    }
    if let Some(dir) = &args.storage_dir {
        cfg.storage.dir = Some(dir.clone());
    }

    if let Err(errors) = cfg.validate() {
        let details: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        return Err(anyhow::anyhow!(
            "Invalid configuration:\n  {}",
            details.join("\n  ")
        ));
    }

    tracing::debug!(base_url = cfg.base_url(), "configuration loaded");

    let (storage, storage_label): (Box<dyn storage::SessionStorage>, String) = if args.ephemeral
    {
        (Box::new(storage::MemoryStorage::new()), "<memory>".to_string())
    } else {
        let file = storage::FileStorage::new(&cfg.storage_dir());
        let label = file.path().display().to_string();
        (Box::new(file), label)
    };

    let mut session_store = store::SessionStore::open(storage, cfg.default_language());
    session_store.subscribe(|s| {
        tracing::debug!(
            authenticated = s.is_authenticated(),
            language = %s.language(),
            has_token = s.token().is_some(),
            "session updated"
        );
    });

    let ctx = cli::Context {
        store: RefCell::new(session_store),
        api: api::ApiClient::new(cfg.base_url()),
        storage_label,
    };

    match args.command {
        Some(command) => cli::run_once(&ctx, command),
        None => cli::run_repl(&ctx),
    }
}
