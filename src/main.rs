//! Autocomplete - command-line entrypoint.
//!
//! Loads configuration, initializes logging, builds the word index from the
//! configured seed words plus any words given on the command line, and answers
//! a single query.

use autocomplete_lib::config::{self, AutocompleteConfig, ConfigLoader, ConfigResult};
use autocomplete_lib::error::{
    AutocompleteError, AutocompleteResult, ErrorContext, ErrorReporter, TracingErrorReporter,
};
use autocomplete_lib::{logging, Autocompleter};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

/// Command line arguments.
#[derive(Parser, Debug)]
#[clap(name = "autocomplete", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Words added to the index on top of the configured seed words.
#[derive(ClapArgs, Debug)]
struct WordArgs {
    /// Word to add before answering (repeatable)
    #[clap(short, long = "word")]
    words: Vec<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the stored words starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        #[clap(flatten)]
        words: WordArgs,

        /// Print suggestions as a JSON array
        #[clap(long)]
        json: bool,
    },

    /// Print whether a word is stored
    Contains {
        /// Word to look up
        word: String,

        #[clap(flatten)]
        words: WordArgs,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Loads configuration from the `--config` file and the environment.
fn read_config(args: &Args) -> ConfigResult<AutocompleteConfig> {
    ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX).load()
}

/// Loads configuration, logging and exiting on failure.
fn load_config(args: &Args) -> AutocompleteConfig {
    match read_config(args) {
        Ok(config) => config,
        Err(e) => {
            // Logging is not configured yet; fall back to defaults to report
            if let Err(log_err) = logging::init_logging(&config::LogConfig::default()) {
                eprintln!("{log_err}");
            }
            let context = ErrorContext::new(AutocompleteError::Config(e), "config")
                .with_details(format!("config file: {:?}", args.config));
            TracingErrorReporter.report(&context);
            process::exit(1);
        }
    }
}

/// Builds the index from seed words plus extra words.
fn build_index(config: &AutocompleteConfig, extra: &WordArgs) -> AutocompleteResult<Autocompleter> {
    let completer = Autocompleter::from_config(&config.completion)?;
    completer.add_words(&extra.words)?;
    info!(words = completer.len(), "Index built");
    Ok(completer)
}

/// Formats suggestions one per line, or as a JSON array.
fn render_suggestions(suggestions: &[String], json: bool) -> AutocompleteResult<String> {
    if json {
        Ok(serde_json::to_string(suggestions)?)
    } else {
        Ok(suggestions.join("\n"))
    }
}

/// Writes the default configuration to `output` as TOML.
fn write_default_config(output: &Path) -> AutocompleteResult<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&AutocompleteConfig::default())
        .map_err(|e| AutocompleteError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;
    Ok(())
}

/// Main entry point for the application.
fn main() -> AutocompleteResult<()> {
    let args = Args::parse();

    if let Command::GenConfig { output } = &args.command {
        write_default_config(output)?;
        println!("Default configuration written to {}", output.display());
        return Ok(());
    }

    let config = load_config(&args);
    logging::init_logging(&config.log)?;

    match &args.command {
        Command::Complete {
            prefix,
            words,
            json,
        } => {
            let completer = build_index(&config, words)?;
            let suggestions = completer.suggest(prefix);
            if !suggestions.is_empty() || *json {
                println!("{}", render_suggestions(&suggestions, *json)?);
            }
        }
        Command::Contains { word, words } => {
            let completer = build_index(&config, words)?;
            println!("{}", completer.contains(word));
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { .. } => {}
    }

    Ok(())
}
