//! CLI for the mdpost article bundler.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use mdpost_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_convert, run_man};

/// Top-level CLI for the mdpost article bundler.
#[derive(Debug, Parser)]
#[command(name = "mdpost")]
#[command(
    about = "Convert exported Markdown articles into self-contained Hexo post bundles",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert one or more Markdown documents into post bundles.
    Convert {
        /// Markdown files to convert.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Post title (defaults to each document's filename stem).
        #[arg(long)]
        title: Option<String>,

        /// Publication date as YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<String>,

        /// Categories, comma-separated or repeated.
        #[arg(long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Tags, comma-separated or repeated.
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,

        /// Blog root directory (defaults to each document's parent directory).
        #[arg(long)]
        output_root: Option<PathBuf>,

        /// URL prefix for resolving scheme-less image references.
        #[arg(long)]
        url_prefix: Option<String>,

        /// Convert up to N documents concurrently.
        #[arg(long, default_value = "1", value_name = "N")]
        jobs: usize,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Convert {
                files,
                title,
                date,
                categories,
                tags,
                output_root,
                url_prefix,
                jobs,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_convert(
                    &cfg,
                    files,
                    title,
                    date,
                    categories,
                    tags,
                    output_root,
                    url_prefix,
                    jobs,
                )
                .await?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
