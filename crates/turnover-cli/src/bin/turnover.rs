use std::fs;
use std::process;

use clap::{Parser, Subcommand};

use turnover_cli::commands::{config_ops, pool_ops, suggest_ops, wizard_ops};

#[derive(Parser)]
#[command(name = "turnover", about = "Sales-entry wizard and suggestion diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the interactive entry wizard on stdin/stdout
    Wizard {
        /// Path to the newline-delimited brand list
        brands_file: String,
        /// CSV file records are appended to
        #[arg(long, default_value = "turnover.csv")]
        out: String,
        /// Append records as JSON lines to this file instead of CSV
        #[arg(long)]
        jsonl: Option<String>,
        /// User identifier for history ranking
        #[arg(long, default_value = "0")]
        user: u64,
        /// Path to a custom settings TOML
        #[arg(long)]
        config: Option<String>,
    },

    /// Query the suggestion engine once
    Suggest {
        /// Path to the newline-delimited brand list
        brands_file: String,
        /// Partial company name
        fragment: String,
        /// Previously confirmed name, ranked first (repeatable)
        #[arg(long)]
        history: Vec<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a brand list and report diagnostics
    PoolCheck {
        /// Path to the newline-delimited brand list
        brands_file: String,
    },

    /// Print the embedded default settings TOML
    ConfigExport,

    /// Validate a settings TOML file
    ConfigValidate {
        /// Path to the settings TOML
        file: String,
    },
}

fn init_settings(config: Option<&str>) {
    let Some(path) = config else { return };
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read settings at {}: {}", path, e);
        process::exit(1);
    });
    turnover_core::settings::init_custom(content).unwrap_or_else(|e| {
        eprintln!("Invalid settings: {}", e);
        process::exit(1);
    });
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Wizard {
            brands_file,
            out,
            jsonl,
            user,
            config,
        } => {
            init_settings(config.as_deref());
            wizard_ops::run(&brands_file, &out, jsonl.as_deref(), user);
        }

        Command::Suggest {
            brands_file,
            fragment,
            history,
            json,
        } => suggest_ops::run(&brands_file, &fragment, &history, json),

        Command::PoolCheck { brands_file } => pool_ops::check(&brands_file),

        Command::ConfigExport => config_ops::settings_export(),

        Command::ConfigValidate { file } => config_ops::settings_validate(&file),
    }
}
