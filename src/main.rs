// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use scrivai::app_config::{AssistProvider, Config, LogLevel};
use scrivai::assist::{AssistService, LocalReason, Origin};
use scrivai::file_utils::FileManager;
use scrivai::language_utils::display_language;
use scrivai::TransformKind;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize the document
    Summarize(DocumentArgs),

    /// Analyze the tone of the document
    Tone(DocumentArgs),

    /// Rewrite the document in a more formal register
    Formal(DocumentArgs),

    /// Rewrite the document more concisely
    Concise(DocumentArgs),

    /// Translate the document
    Translate {
        /// Target language name or ISO code (e.g. 'Spanish', 'fr', 'deu')
        #[arg(short, long)]
        target: Option<String>,

        #[command(flatten)]
        document: DocumentArgs,
    },

    /// Generate shell completions for scrivai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct DocumentArgs {
    /// Text (.txt) file to process; reads stdin when omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Skip the remote model and use local rules only
    #[arg(long)]
    local: bool,

    /// Write the result to this file
    #[arg(short, long, value_name = "PATH", conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Save the result as document_YYYY-MM-DD.txt in the current directory
    #[arg(short, long)]
    save: bool,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// scrivai - AI writing assistant
///
/// Summarizes, analyzes, rewrites and translates text with Gemini, falling
/// back to local rules whenever the model is unavailable.
#[derive(Parser, Debug)]
#[command(name = "scrivai")]
#[command(version)]
#[command(about = "AI writing assistant with a local fallback")]
#[command(long_about = "scrivai runs one text transformation over a document using the Gemini API.
When the API cannot be reached, a deterministic local rule engine produces the result instead.

EXAMPLES:
    scrivai summarize notes.txt                  # Summarize a file
    cat notes.txt | scrivai tone                 # Analyze text from stdin
    scrivai formal --local draft.txt             # Use local rules only
    scrivai translate -t fr letter.txt --save    # Translate and save as document_YYYY-MM-DD.txt
    scrivai concise draft.txt -o short.txt -f    # Write the result, replacing short.txt
    scrivai completions bash > scrivai.bash      # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically. The API key may also come from GEMINI_API_KEY.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level: LevelFilter::Trace }))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI colour for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The max level is lowered or raised once the config is known
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    let (kind, document) = match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "scrivai", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Summarize(document) => (Kind::Summarize, document),
        Commands::Tone(document) => (Kind::Tone, document),
        Commands::Formal(document) => (Kind::Formal, document),
        Commands::Concise(document) => (Kind::Concise, document),
        Commands::Translate { target, document } => (Kind::Translate(target), document),
    };

    run_transform(kind, document).await
}

/// Transformation picked on the command line, before the config is loaded
enum Kind {
    Summarize,
    Tone,
    Formal,
    Concise,
    Translate(Option<String>),
}

impl Kind {
    fn resolve(self, config: &Config) -> TransformKind {
        match self {
            Self::Summarize => TransformKind::Summarize,
            Self::Tone => TransformKind::Tone,
            Self::Formal => TransformKind::Formal,
            Self::Concise => TransformKind::Concise,
            Self::Translate(target) => {
                let target = target.unwrap_or_else(|| config.target_language.clone());
                TransformKind::Translate(display_language(&target))
            }
        }
    }
}

async fn run_transform(kind: Kind, options: DocumentArgs) -> Result<()> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = load_config(&options)?;

    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let text = read_input(options.input.as_deref())?;
    let kind = kind.resolve(&config);
    let service = AssistService::from_config(&config)?;

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(kind.progress_message());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = service.run(kind, &text).await;
    spinner.finish_and_clear();
    let outcome = outcome?;

    match &outcome.origin {
        Origin::Remote => info!("{} (by {})", outcome.title(), outcome.origin),
        Origin::Local(LocalReason::Bypassed) => info!("{} (by {})", outcome.title(), outcome.origin),
        Origin::Local(LocalReason::RemoteFailed(reason)) => {
            warn!("{} (by {}): {}", outcome.title(), outcome.origin, reason)
        }
    }

    println!("{}", outcome.text);

    let destination = match (&options.output, options.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(FileManager::default_download_name())),
        (None, false) => None,
    };
    if let Some(path) = destination {
        let saved = FileManager::save_document(&path, &outcome.text, options.force_overwrite)?;
        info!("Saved to {:?}", saved);
    }

    Ok(())
}

/// Load the config file, creating a default one when missing, then apply CLI overrides
fn load_config(options: &DocumentArgs) -> Result<Config> {
    let config_path = &options.config;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if options.local {
        config.assistant.provider = AssistProvider::Local;
    }

    if let Some(api_key) = &options.api_key {
        config.assistant.gemini.api_key = api_key.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

/// Read the document from a `.txt` file, or from stdin when no path is given
fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(FileManager::open_text_file(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}
