use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Remove password protection from PDF files, overwriting them in place.
#[derive(Debug, Parser)]
#[command(name = "pdfunlock", about, version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the overwrite warning and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remove the password from each file and overwrite it in place
    Remove {
        /// PDF files to unlock (non-PDF paths are skipped)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        password: PasswordArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Skip re-opening the decrypted output before it replaces the original
        #[arg(long)]
        no_verify: bool,

        /// Skip files larger than this many bytes
        #[arg(long, value_name = "BYTES")]
        max_input_bytes: Option<usize>,
    },

    /// Check which files the password would unlock, without writing anything
    Check {
        /// PDF files to check (non-PDF paths are skipped)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        password: PasswordArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show whether each file is encrypted and how
    Status {
        /// PDF files to inspect (non-PDF paths are skipped)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Where the password comes from.
#[derive(Debug, Clone, Args)]
pub struct PasswordArgs {
    /// Password applied to every file
    #[arg(long, conflicts_with = "password_stdin")]
    pub password: Option<String>,

    /// Read the password from the first line of standard input
    #[arg(long)]
    pub password_stdin: bool,
}

/// Output format for all subcommands.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON output
    Json,
}
