// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::domain::PrefixChoices;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External emoji table; the built-in table is used when unset
    #[serde(default)]
    pub emoji_file: Option<PathBuf>,

    /// Add an emoji after the prefix tag (default: true)
    #[serde(default = "default_true")]
    pub use_emoji: bool,

    /// Prefix labels in display order, each `tag: description`
    #[serde(default = "default_choices")]
    pub choices: Vec<String>,

    /// Longest message (in characters) the prompt accepts after the prefix
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_message_len() -> usize {
    156
}

fn default_choices() -> Vec<String> {
    PrefixChoices::builtin().labels().to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emoji_file: None,
            use_emoji: default_true(),
            choices: default_choices(),
            max_message_len: default_max_message_len(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.commitmoji.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".commitmoji.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (COMMITMOJI_EMOJI_FILE, COMMITMOJI_USE_EMOJI)
        figment = figment.merge(Env::prefixed("COMMITMOJI_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority); EMOJI_FILE arrives through clap
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitmoji").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref path) = cli.emoji_file {
            self.emoji_file = Some(path.clone());
        }
        if cli.no_emoji {
            self.use_emoji = false;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_message_len == 0 {
            return Err(Error::Config("max_message_len must be at least 1".into()));
        }
        self.prefix_choices().map(|_| ())
    }

    pub fn prefix_choices(&self) -> Result<PrefixChoices> {
        if self.choices.is_empty() {
            return Err(Error::Config("choices cannot be empty".into()));
        }
        PrefixChoices::new(self.choices.clone()).ok_or_else(|| {
            Error::Config("every choice needs a tag before its colon, e.g. 'feat: ...'".into())
        })
    }

    /// Write the default config file with secure permissions
    pub fn write_default(path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = r#"# commitmoji configuration

# JSON or TOML file mapping prefix tags to emoji, e.g. {"feat": ["✨"]}
# Leave unset to use the built-in table. EMOJI_FILE overrides this.
# emoji_file = "/path/to/emoji.json"

# Add an emoji after the prefix tag
use_emoji = true

# Longest commit message (in characters) accepted after the prefix
max_message_len = 156

# Prefix labels in display order
choices = [
  "feat: A new feature",
  "fix: A bug fix",
  "docs: Documentation only changes",
  "style: Changes that do not affect the code meaning (white-space, formatting, etc.)",
  "refactor: A code change that neither fixes a bug nor adds a feature",
  "perf: A code change that improves performance",
  "test: Adding missing tests or correcting existing tests",
  "chore: Other changes that don't modify src or test files",
]
"#;

        fs::write(path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }
}
