// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "commitmoji")]
#[command(version)]
#[command(about = "Interactive conventional-commit prompt with emoji", long_about = None)]
pub struct Cli {
    /// JSON (or .toml) file mapping prefix tags to emoji
    #[arg(long, env = "EMOJI_FILE")]
    pub emoji_file: Option<PathBuf>,

    /// Never add an emoji to the prefix
    #[arg(long)]
    pub no_emoji: bool,

    /// Print the message instead of running git commit
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
    /// List the emoji registered for each prefix
    Emojis,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
