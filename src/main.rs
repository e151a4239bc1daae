//! Folio - personal portfolio site tooling
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_app::config;
use folio_core::prelude::*;
use folio_data::DEFAULT_NAV_SCOPE;

/// Folio - serve the portfolio site and inspect its content
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Serve the portfolio site and inspect its content", long_about = None)]
struct Args {
    /// Directory holding folio.toml
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the built website
    Serve {
        /// Built site directory (overrides folio.toml)
        #[arg(long, value_name = "DIST")]
        dir: Option<PathBuf>,

        /// Port to listen on (overrides folio.toml and PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Fetch all site content from the store and print it as JSON
    Content {
        /// Navigation scope to fetch
        #[arg(long, default_value = DEFAULT_NAV_SCOPE)]
        scope: String,
    },

    /// Write a default folio.toml
    Init,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let serving = matches!(args.command, Command::Serve { .. });
    folio_core::logging::init(serving)?;

    info!("Folio {} starting", env!("CARGO_PKG_VERSION"));

    let mut settings = config::load_with_env(&args.config_dir);

    match args.command {
        Command::Serve { dir, port } => {
            config::apply_env_port_override(&mut settings)?;
            if let Some(dir) = dir {
                settings.server.dist_dir = dir;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            folio::run_server(folio::ServerConfig {
                port: settings.server.port,
                dist_dir: settings.server.dist_dir,
            })
            .await?;
        }
        Command::Content { scope } => {
            let store = folio::store_from_settings(&settings.store)?;
            let (content, json) = folio::dump(&store, &scope).await?;
            println!("{json}");
            if !content.errors.is_empty() {
                warn!("{} sections failed to load", content.errors.len());
                std::process::exit(1);
            }
        }
        Command::Init => {
            if config::init_config(&args.config_dir)? {
                eprintln!("Created {}", args.config_dir.join(config::CONFIG_FILENAME).display());
            } else {
                eprintln!("{} already exists", config::CONFIG_FILENAME);
            }
        }
    }

    Ok(())
}
