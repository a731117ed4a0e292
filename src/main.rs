//! Snippets CLI - store and retrieve snippets of text

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Mutex;
use snippets::config::{self, SnippetsConfig};
use snippets::output::{error_json, OutputMode};
use snippets::storage::SnippetStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "snippets")]
#[command(version)]
#[command(about = "Store and retrieve snippets of text")]
#[command(long_about = r#"
Snippets keeps named pieces of text in a local SQLite database.

Example usage:
  snippets put greeting "Hello, world"
  snippets get greeting
  snippets catalog
  snippets search world
"#)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Store a snippet
    Put {
        /// Name of the snippet
        name: String,

        /// Snippet text
        snippet: String,

        /// Keep the snippet out of catalog and search results
        #[arg(long)]
        hidden: bool,
    },

    /// Retrieve a snippet
    Get {
        /// Name of the snippet
        name: String,
    },

    /// List the names of all visible snippets
    Catalog,

    /// Search visible snippets by name or text
    Search {
        /// Text to look for
        term: String,
    },

    /// Write a config file and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Put { .. } => "put",
            Commands::Get { .. } => "get",
            Commands::Catalog => "catalog",
            Commands::Search { .. } => "search",
            Commands::Init { .. } => "init",
        }
    }
}

fn init_logging(verbose: bool, settings: &SnippetsConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let file_layer = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(settings.log_path())
        .ok()
        .map(|file| fmt::layer().with_writer(Mutex::new(file)).with_ansi(false));

    let stderr_layer = verbose.then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .with(filter)
        .init();
}

fn run(cli: Cli, settings: SnippetsConfig, output_mode: OutputMode) -> anyhow::Result<()> {
    let database = cli.database.unwrap_or_else(|| settings.database_path());

    let open_store = || SnippetStore::open(&database);

    match cli.command {
        Commands::Put { name, snippet, hidden } => {
            commands::run_put(&open_store()?, output_mode, &name, &snippet, hidden)
        }
        Commands::Get { name } => commands::run_get(&open_store()?, output_mode, &name),
        Commands::Catalog => commands::run_catalog(&open_store()?, output_mode),
        Commands::Search { term } => commands::run_search(&open_store()?, output_mode, &term),
        Commands::Init { force } => {
            let config_path = cli.config.unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE));
            commands::run_init(output_mode, &config_path, &database, force)
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let output_mode = OutputMode::from_json_flag(cli.json);
    let command = cli.command.name();

    let result = SnippetsConfig::load(cli.config.as_deref()).and_then(|loaded| {
        let settings = loaded.unwrap_or_default();
        init_logging(cli.verbose, &settings);
        tracing::debug!("Running {} command", command);
        run(cli, settings, output_mode)
    });

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{} failed: {:#}", command, err);
            match output_mode {
                OutputMode::Human => snippets::ui::error(&format!("{:#}", err)),
                OutputMode::Json => match error_json(command, &format!("{:#}", err)) {
                    Ok(json) => println!("{}", json),
                    Err(_) => snippets::ui::error(&format!("{:#}", err)),
                },
            }
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put_with_hidden() {
        let cli = Cli::try_parse_from(["snippets", "put", "a", "hello", "--hidden"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Put {
                name: "a".to_string(),
                snippet: "hello".to_string(),
                hidden: true,
            }
        );
    }

    #[test]
    fn test_parse_put_defaults_to_visible() {
        let cli = Cli::try_parse_from(["snippets", "put", "a", "hello"]).unwrap();
        assert!(matches!(cli.command, Commands::Put { hidden: false, .. }));
    }

    #[test]
    fn test_parse_get_catalog_search() {
        let cli = Cli::try_parse_from(["snippets", "get", "a"]).unwrap();
        assert_eq!(cli.command, Commands::Get { name: "a".to_string() });

        let cli = Cli::try_parse_from(["snippets", "catalog"]).unwrap();
        assert_eq!(cli.command, Commands::Catalog);

        let cli = Cli::try_parse_from(["snippets", "search", "bar"]).unwrap();
        assert_eq!(cli.command, Commands::Search { term: "bar".to_string() });
        assert_eq!(cli.command.name(), "search");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["snippets", "catalog", "--json", "-d", "x.db"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.database, Some(PathBuf::from("x.db")));
    }

    #[test]
    fn test_put_requires_snippet_text() {
        assert!(Cli::try_parse_from(["snippets", "put", "a"]).is_err());
    }
}
