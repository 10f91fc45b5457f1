use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chirpy", about = "Chirpy: a small social posting service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Empty the database file
    Reset(ResetArgs),
    /// Print a bcrypt hash of a password
    HashPassword(HashPasswordArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to listen on
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Database file
    #[arg(long)]
    pub db: Option<PathBuf>,
    /// Directory served under /app
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Delete the database file before starting
    #[arg(long)]
    pub debug: bool,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Database file
    #[arg(long, default_value = "./chirpy_database.json")]
    pub db: PathBuf,
}

#[derive(Args)]
pub struct HashPasswordArgs {
    pub password: String,
}
