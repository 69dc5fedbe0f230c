use clap::{Parser, Subcommand};

use kana_cli::commands::replay_ops::ReplayArgs;
use kana_cli::commands::{config_ops, expand_ops, replay_ops, rules_ops, words_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana typing engine diagnostics")]
struct Cli {
    /// Log engine events to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Settings TOML to use instead of the embedded defaults
    #[arg(long, global = true)]
    settings: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every romaji spelling of a kana reading
    Expand {
        /// Kana reading (hiragana or katakana)
        kana: String,
        /// Rule table file (default: embedded table)
        #[arg(long)]
        rules: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Parse a rule table and report skipped lines
    RulesCheck {
        /// Rule table file
        file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded default rule table
    RulesExport,
    /// Parse a word list and show each word's display spelling
    WordsCheck {
        /// Word list file
        file: String,
        /// Rule table file (default: embedded table)
        #[arg(long)]
        rules: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded default settings
    SettingsExport,
    /// Validate a settings file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
    /// Type a scripted keystroke string through a session
    Replay {
        /// Word list file
        #[arg(long)]
        words: String,
        /// Rule table file (default: embedded table)
        #[arg(long)]
        rules: Option<String>,
        /// Keystrokes to feed, in order
        #[arg(long)]
        keys: String,
        /// Seed for the word shuffle
        #[arg(long)]
        seed: Option<u64>,
        /// Keep the word list order
        #[arg(long)]
        no_shuffle: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kana_core=debug,kana_session=debug")),
            )
            .init();
    }
    if let Some(file) = &cli.settings {
        config_ops::apply_settings(file);
    }

    match cli.command {
        Command::Expand { kana, rules, json } => {
            expand_ops::expand_cmd(&kana, rules.as_deref(), json)
        }
        Command::RulesCheck { file, json } => rules_ops::rules_check(&file, json),
        Command::RulesExport => rules_ops::rules_export(),
        Command::WordsCheck { file, rules, json } => {
            words_ops::words_check(&file, rules.as_deref(), json)
        }
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Replay {
            words,
            rules,
            keys,
            seed,
            no_shuffle,
            json,
        } => replay_ops::replay_cmd(ReplayArgs {
            words: &words,
            rules: rules.as_deref(),
            keys: &keys,
            seed,
            no_shuffle,
            json,
        }),
    }
}
