//! whoport CLI - Find out which process owns a network port
//!
//! A command-line tool that asks `lsof` and `ps` who is bound to a port,
//! what service usually lives there and what else that process is doing.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use commands::Context;

#[derive(Parser)]
#[command(name = "whoport")]
#[command(author, version, about = "Find out which process owns a network port")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    json: bool,

    /// Exit with status 1 when nothing is found
    #[arg(long, global = true)]
    strict: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use this config file instead of ~/.whoport/config.json
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show full details of what is using a port
    Info { port: u16 },

    /// Show who owns a port, one line per process
    #[command(alias = "who")]
    Whatis { port: u16 },

    /// Show the process on a port with its tree and connections
    #[command(alias = "proc")]
    Process { port: u16 },

    /// Show the conventional service and range of a port
    Service { port: u16 },

    /// List every listening port on the system
    #[command(alias = "ls")]
    All,

    /// Show or initialize the configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the active configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if cli.no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let ctx = Context::load(cli.config_path, cli.json).await;
    tracing::debug!(config = ?ctx.config, "Configuration loaded");

    let outcome = match cli.command {
        Commands::Info { port } => commands::info::run(&ctx, port).await?,
        Commands::Whatis { port } => commands::whatis::run(&ctx, port).await?,
        Commands::Process { port } => commands::process::run(&ctx, port).await?,
        Commands::Service { port } => commands::service::run(&ctx, port)?,
        Commands::All => commands::all::run(&ctx).await?,
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::config::show(&ctx).await?,
            ConfigAction::Init { force } => commands::config::init(&ctx, force).await?,
        },
    };

    println!("{}", outcome.output);

    if cli.strict && !outcome.found {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
