//! # Chatbot Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges, and validates the chatbot configuration. It
//! decides where the session log lives, how strict the similarity fallback is,
//! which scorer it uses, and whether an extra corpus file is loaded.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`ConfigOverrides`, built by `main.rs`)
//! 2. An explicit `--config` file, or else a project `.chatbot.toml` found in
//!    the current directory or its ancestors (the search stops at a `.git` directory)
//! 3. The user file `<config dir>/chatbot/config.toml`
//! 4. Default values defined in the code
//!
//! After merging, `~` in paths is expanded and the result is validated before
//! anything else sees it.
//!
//! ## Examples
//!
//! ```toml
//! [session]
//! log_file = "logs/session.log"
//!
//! [matcher]
//! confidence_floor = 0.65
//! default_reply = "I'm not fully sure about that. Could you rephrase?"
//! scorer = "levenshtein"
//!
//! [corpus]
//! path = "~/.config/chatbot/corpus.toml"
//! include_builtin = true
//! ```
//!
//! ```rust
//! let cfg = config::load_config(args.config.as_deref(), &overrides)?;
//! let floor = cfg.matcher.confidence_floor;
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{ChatError, Result};
use crate::matching::similarity::ScorerKind;
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
}

/// Settings for the session log written by the REPL.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Append-only log file (can use ~). Relative paths resolve against the working directory.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// Settings for the similarity fallback.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatcherConfig {
    /// Minimum score a corpus entry needs to be used instead of the default reply.
    #[serde(default = "default_confidence_floor")]
    pub confidence_floor: f64,
    /// Reply given when nothing in the corpus is close enough.
    #[serde(default = "default_reply")]
    pub default_reply: String,
    /// Scoring function used to compare utterances.
    #[serde(default)]
    pub scorer: ScorerKind,
}

/// Settings for the training corpus.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// Optional TOML corpus file with extra entries and pairs (can use ~).
    #[serde(default)]
    pub path: Option<String>,
    /// Whether the built-in greetings and small-talk corpus is loaded.
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            confidence_floor: default_confidence_floor(),
            default_reply: default_reply(),
            scorer: ScorerKind::default(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            include_builtin: default_include_builtin(),
        }
    }
}

fn default_log_file() -> String {
    "logs/session.log".to_string()
}
fn default_confidence_floor() -> f64 {
    0.65
}
fn default_reply() -> String {
    "I'm not fully sure about that. Could you rephrase?".to_string()
}
fn default_include_builtin() -> bool {
    true
}

/// Values given on the command line. `None` leaves the file/default value in place.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub log_file: Option<PathBuf>,
    pub confidence_floor: Option<f64>,
    pub corpus: Option<PathBuf>,
    pub scorer: Option<ScorerKind>,
}

const PROJECT_CONFIG_FILENAME: &str = ".chatbot.toml";

/// Loads the effective configuration.
///
/// `explicit` replaces the project file search when given. Fails if a config
/// file exists but cannot be read or parsed, or if the merged result is invalid.
pub fn load_config(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            load_project_config(&cwd)?
        }
    };
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    apply_overrides(&mut merged_config, overrides);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Chatbot", "chatbot") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No .chatbot.toml found in the current directory or its ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win over user values whenever they differ from the defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = Config::default();

    merged.session.log_file = if project_cfg.session.log_file != defaults.session.log_file {
        project_cfg.session.log_file
    } else {
        user.session.log_file
    };
    merged.matcher.confidence_floor =
        if project_cfg.matcher.confidence_floor != defaults.matcher.confidence_floor {
            project_cfg.matcher.confidence_floor
        } else {
            user.matcher.confidence_floor
        };
    merged.matcher.default_reply =
        if project_cfg.matcher.default_reply != defaults.matcher.default_reply {
            project_cfg.matcher.default_reply
        } else {
            user.matcher.default_reply
        };
    merged.matcher.scorer = if project_cfg.matcher.scorer != defaults.matcher.scorer {
        project_cfg.matcher.scorer
    } else {
        user.matcher.scorer
    };
    merged.corpus.path = project_cfg.corpus.path.or(user.corpus.path);
    merged.corpus.include_builtin =
        if project_cfg.corpus.include_builtin != defaults.corpus.include_builtin {
            project_cfg.corpus.include_builtin
        } else {
            user.corpus.include_builtin
        };
    merged
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(log_file) = &overrides.log_file {
        config.session.log_file = log_file.to_string_lossy().into_owned();
    }
    if let Some(floor) = overrides.confidence_floor {
        config.matcher.confidence_floor = floor;
    }
    if let Some(corpus) = &overrides.corpus {
        config.corpus.path = Some(corpus.to_string_lossy().into_owned());
    }
    if let Some(scorer) = overrides.scorer {
        config.matcher.scorer = scorer;
    }
}

fn expand_config_paths(config: &mut Config) {
    config.session.log_file = shellexpand::tilde(&config.session.log_file).into_owned();
    debug!("Expanded session log path: {}", config.session.log_file);
    if let Some(path) = config.corpus.path.as_mut() {
        *path = shellexpand::tilde(path).into_owned();
        debug!("Expanded corpus path: {}", path);
    }
}

fn validate_config(config: &Config) -> Result<()> {
    let floor = config.matcher.confidence_floor;
    if !(0.0..=1.0).contains(&floor) {
        return Err(anyhow!(ChatError::Config(format!(
            "confidence_floor must be within [0, 1], got {}",
            floor
        ))));
    }
    if config.matcher.default_reply.trim().is_empty() {
        return Err(anyhow!(ChatError::Config(
            "default_reply cannot be empty".to_string()
        )));
    }
    if config.session.log_file.trim().is_empty() {
        return Err(anyhow!(ChatError::Config(
            "session log_file cannot be empty".to_string()
        )));
    }
    if config.corpus.path.is_none() && !config.corpus.include_builtin {
        warn!("Built-in corpus disabled and no corpus file set; only exact pairs will match.");
    }
    Ok(())
}
