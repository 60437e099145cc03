//! `hera` — the HERA CLI client.
//!
//! Inspects the built-in catalog locally (domains, resolve, code,
//! crumbs, validate) and talks to a herad instance for server
//! commands (status).

mod commands;
mod config;

use clap::{Parser, Subcommand};

/// HERA CLI tool.
#[derive(Parser, Debug)]
#[command(name = "hera", about = "HERA CLI client")]
struct Cli {
    /// Path to client config file (default: ~/.hera/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Context management (server URL, token).
    #[command(name = "context")]
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Switch the current context.
    #[command(name = "use")]
    Use {
        #[command(subcommand)]
        what: UseWhat,
    },

    /// List catalog domains with their sections.
    Domains,

    /// Resolve a route triple against the catalog.
    Resolve {
        /// Domain id.
        #[arg(long)]
        domain: Option<String>,
        /// Section id.
        #[arg(long)]
        section: Option<String>,
        /// Workspace id.
        #[arg(long)]
        workspace: Option<String>,
    },

    /// Generate a smart code from route segments.
    Code {
        /// Domain id (required).
        domain: String,
        #[arg(long)]
        section: Option<String>,
        #[arg(long)]
        workspace: Option<String>,
        /// Type segment (e.g. entity, txn).
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        subtype: Option<String>,
    },

    /// Build the breadcrumb trail for route segments.
    Crumbs {
        #[arg(long)]
        domain: Option<String>,
        #[arg(long)]
        section: Option<String>,
        #[arg(long)]
        workspace: Option<String>,
        #[arg(long = "entity-type")]
        entity_type: Option<String>,
        #[arg(long)]
        id: Option<String>,
    },

    /// Validate the built-in catalog.
    Validate,

    /// Check server status.
    Status,

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// List all contexts.
    List,
    /// Set properties on a context (creates it if missing).
    Set {
        name: String,
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        token: Option<String>,
    },
    /// Delete a context.
    Delete { name: String },
}

#[derive(Subcommand, Debug)]
enum UseWhat {
    /// Switch to a context.
    Context { name: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let json = cli.output == "json";

    match cli.command {
        Commands::Context { action } => match action {
            ContextAction::List => commands::context::list(&config_path),
            ContextAction::Set { name, server, token } => {
                commands::context::set(&name, server, token, &config_path)
            }
            ContextAction::Delete { name } => commands::context::delete(&name, &config_path),
        },
        Commands::Use { what } => match what {
            UseWhat::Context { name } => commands::context::use_context(&name, &config_path),
        },
        Commands::Domains => commands::catalog::domains(json),
        Commands::Resolve {
            domain,
            section,
            workspace,
        } => commands::catalog::resolve(
            domain.as_deref(),
            section.as_deref(),
            workspace.as_deref(),
            json,
        ),
        Commands::Code {
            domain,
            section,
            workspace,
            kind,
            subtype,
        } => commands::catalog::code(
            &domain,
            section.as_deref(),
            workspace.as_deref(),
            kind.as_deref(),
            subtype.as_deref(),
        ),
        Commands::Crumbs {
            domain,
            section,
            workspace,
            entity_type,
            id,
        } => commands::catalog::crumbs(
            domain.as_deref(),
            section.as_deref(),
            workspace.as_deref(),
            entity_type.as_deref(),
            id.as_deref(),
            json,
        ),
        Commands::Validate => commands::catalog::validate(),
        Commands::Status => commands::status::status(&config_path),
        Commands::Version => {
            println!("hera {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
