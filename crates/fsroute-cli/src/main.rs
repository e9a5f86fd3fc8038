mod commands;
mod project;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fsroute::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fsroute")]
#[command(version, about = "fsroute CLI - file-system routing for axum", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "fsroute.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route with its file and middleware chain
    List {
        /// Routes directory (defaults to routing.routes_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Check a routes directory for invalid or shared paths
    Check {
        /// Routes directory (defaults to routing.routes_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Generate the static registry source for a routes directory
    Gen {
        /// Routes directory (defaults to routing.routes_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Router state type, e.g. crate::state::AppState
        #[arg(short, long, default_value = "()")]
        state: String,

        /// Name of the generated function
        #[arg(long, default_value = "registry")]
        fn_name: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Scaffold a route or middleware file
    New {
        /// Route path relative to the routes directory, e.g. users/[id]
        route: String,

        /// HTTP method of the handler
        #[arg(short, long, default_value = "get")]
        method: String,

        /// Create a _middleware file in the ROUTE directory instead
        #[arg(long)]
        middleware: bool,

        /// Routes directory (defaults to routing.routes_dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Router state type
        #[arg(short, long, default_value = "()")]
        state: String,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let rules = config.routing.naming_rules();
    let routes_dir = |dir: Option<PathBuf>| dir.unwrap_or_else(|| PathBuf::from(&config.routing.routes_dir));

    // Execute command
    match cli.command {
        Commands::List { dir } => {
            commands::list::execute(&routes_dir(dir), &rules)?;
        }
        Commands::Check { dir } => {
            commands::check::execute(&routes_dir(dir), &rules)?;
        }
        Commands::Gen {
            dir,
            state,
            fn_name,
            out,
        } => {
            commands::gen::execute(&routes_dir(dir), &rules, &state, &fn_name, out.as_deref())?;
        }
        Commands::New {
            route,
            method,
            middleware,
            dir,
            state,
        } => {
            let kind = if middleware {
                commands::new::FileKind::Middleware
            } else {
                commands::new::FileKind::Route { method }
            };
            commands::new::execute(&routes_dir(dir), &rules, &route, kind, &state)?;
        }
    }

    Ok(())
}
