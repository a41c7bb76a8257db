// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::io::IsTerminal;

use console::{Term, style};
use dialoguer::Confirm;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::{EmojiTable, PrefixChoices};
use crate::error::{Error, Result};
use crate::services::{
    emoji,
    git::{Committer, GitCommitter, PrintCommitter},
    terminal::{TermKeys, TermScreen},
};
use crate::wizard::{Outcome, Wizard, run_session};

pub struct App {
    cli: Cli,
}

/// Everything the prompt needs, loaded before anything is drawn.
struct Session {
    config: Config,
    choices: PrefixChoices,
    emojis: EmojiTable,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    fn load_config(&self) -> Result<Config> {
        let config = Config::load(&self.cli)?;
        debug!(
            emoji_file = ?config.emoji_file,
            use_emoji = config.use_emoji,
            choices = config.choices.len(),
            "config loaded"
        );
        Ok(config)
    }

    fn load_session(&self) -> Result<Session> {
        let config = self.load_config()?;
        let choices = config.prefix_choices()?;
        let emojis = if config.use_emoji {
            emoji::load_table(config.emoji_file.as_deref())?
        } else {
            EmojiTable::empty()
        };
        Ok(Session {
            config,
            choices,
            emojis,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        let session = self.load_session()?;

        if !std::io::stdin().is_terminal() {
            return Err(Error::Input(std::io::Error::other("stdin is not a terminal")));
        }

        let outcome = if self.cli.dry_run {
            Self::prompt(&session, &mut PrintCommitter)?
        } else {
            Self::prompt(&session, &mut GitCommitter::current_dir()?)?
        };

        match outcome {
            Outcome::Quit => debug!("session quit without committing"),
            Outcome::Committed(message) => debug!(%message, "session committed"),
        }
        Ok(())
    }

    fn prompt<C: Committer>(session: &Session, committer: &mut C) -> Result<Outcome> {
        let rng = StdRng::from_os_rng();
        let mut wizard = Wizard::new(&session.choices, &session.emojis, rng)
            .with_char_limit(session.config.max_message_len);
        let mut keys = TermKeys::new(Term::stdout());
        let mut screen = TermScreen::new(Term::stdout());
        run_session(&mut wizard, &mut keys, &mut screen, committer)
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let Some(path) = Config::config_path() else {
                    return Err(Error::Config("Cannot determine config directory".into()));
                };
                if path.exists() {
                    let overwrite = Confirm::new()
                        .with_prompt(format!("{} exists. Overwrite?", path.display()))
                        .default(false)
                        .interact()?;
                    if !overwrite {
                        self.print_info("Kept existing config");
                        return Ok(());
                    }
                }
                Config::write_default(&path)?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                let config = self.load_config()?;
                match config.emoji_file {
                    Some(ref path) => println!("Emoji file: {}", path.display()),
                    None => println!("Emoji file: (built-in)"),
                }
                println!("Use emoji: {}", config.use_emoji);
                println!("Max message length: {}", config.max_message_len);
                println!();
                println!("[choices]");
                for label in &config.choices {
                    println!("  {label}");
                }
                if let Some(ref path) = Config::config_path() {
                    println!();
                    println!("Config file: {}", path.display());
                }
                Ok(())
            }
            Commands::Emojis => {
                Self::print_emojis(&self.load_session()?);
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "commitmoji", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    fn print_emojis(session: &Session) {
        let mut listed = Vec::new();
        for tag in session.choices.tags() {
            if listed.contains(&tag) {
                continue;
            }
            listed.push(tag);
            match session.emojis.glyphs(tag) {
                Some(glyphs) => println!("{:<10} {}", tag, glyphs.join(" ")),
                None => println!("{:<10} {}", tag, style("(none)").dim()),
            }
        }

        // tags in the table that no choice uses
        for (tag, glyphs) in session.emojis.iter() {
            if !listed.contains(&tag) {
                println!("{:<10} {}", style(tag).dim(), glyphs.join(" "));
            }
        }
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}
