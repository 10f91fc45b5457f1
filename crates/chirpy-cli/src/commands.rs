use std::path::{Path, PathBuf};

use anyhow::Context;
use chirpy_crypto::PasswordHasher;
use chirpy_server::{ChirpyServer, ServerConfig};
use chirpy_store::Database;
use colored::Colorize;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Reset(args) => cmd_reset(args),
        Command::HashPassword(args) => cmd_hash_password(args),
    }
}

/// Load `KEY=value` pairs from `dir/.env` into the process environment.
///
/// Variables that are already set keep their values. Returns the file path
/// when one was loaded.
pub fn load_env_file(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(".env");
    dotenvy::from_path(&path).ok().map(|()| path)
}

/// Config file values, then CLI flags, then `JWT_SECRET`.
fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(db) = &args.db {
        config.database_path = db.clone();
    }
    if let Some(root) = &args.root {
        config.static_root = root.clone();
    }
    if args.debug {
        config.debug = true;
    }
    Ok(config.with_env())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    tracing::debug!(?config, "starting server");
    if config.debug {
        println!(
            "{} debug mode: starting from an empty database",
            "!".yellow().bold()
        );
    }
    println!(
        "Serving files from {} on {}",
        config.static_root.display().to_string().bold(),
        config.bind_addr.to_string().cyan()
    );
    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(ChirpyServer::new(config).serve())?;
    Ok(())
}

fn cmd_reset(args: ResetArgs) -> anyhow::Result<()> {
    let db = Database::open_file(&args.db)
        .with_context(|| format!("cannot open database {}", args.db.display()))?;
    db.reset()?;
    println!(
        "{} Database {} has been reset",
        "✓".green().bold(),
        args.db.display()
    );
    Ok(())
}

fn cmd_hash_password(args: HashPasswordArgs) -> anyhow::Result<()> {
    let hash = PasswordHasher::DEFAULT.hash(&args.password)?;
    println!("{hash}");
    Ok(())
}
