// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Every field is optional. Missing or out-of-range values resolve to the
//! constants in [`defaults`], so a partially written or stale settings file
//! never prevents toasts from showing.
//!
//! # Examples
//!
//! ```no_run
//! use toastline::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.default_position = Some("bottom-right".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::EventLogCapacity;
use crate::domain::toast::{DismissAfter, Position};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "toastline";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Auto-dismiss delay for toasts without an explicit duration. `0`
    /// keeps them until closed.
    #[serde(default)]
    pub default_duration_secs: Option<f64>,
    /// Anchor name for toasts without an explicit position.
    #[serde(default)]
    pub default_position: Option<String>,
    #[serde(default)]
    pub base_z_index: Option<i32>,
    /// How long the rendering surface animates a closing toast.
    #[serde(default)]
    pub exit_animation_ms: Option<u64>,
    #[serde(default)]
    pub diagnostics_capacity: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_secs: Some(DEFAULT_DURATION_SECS),
            default_position: Some(DEFAULT_POSITION.to_string()),
            base_z_index: Some(DEFAULT_BASE_Z_INDEX),
            exit_animation_ms: Some(DEFAULT_EXIT_ANIMATION_MS),
            diagnostics_capacity: Some(DEFAULT_EVENT_LOG_CAPACITY),
        }
    }
}

impl Config {
    /// Resolved auto-dismiss policy for toasts without their own duration.
    #[must_use]
    pub fn dismiss_after(&self) -> DismissAfter {
        DismissAfter::from_secs_f64(self.default_duration_secs.unwrap_or(DEFAULT_DURATION_SECS))
    }

    /// Resolved default anchor; unknown names fall back to the top edge.
    #[must_use]
    pub fn position(&self) -> Position {
        match self.default_position.as_deref() {
            Some(name) => name.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "invalid default_position in settings");
                Position::Top
            }),
            None => Position::parse_or_default(DEFAULT_POSITION),
        }
    }

    /// Resolved stacking base.
    #[must_use]
    pub fn base_z_index(&self) -> i32 {
        self.base_z_index.unwrap_or(DEFAULT_BASE_Z_INDEX)
    }

    /// Resolved exit animation length.
    #[must_use]
    pub fn exit_animation(&self) -> Duration {
        Duration::from_millis(self.exit_animation_ms.unwrap_or(DEFAULT_EXIT_ANIMATION_MS))
    }

    /// Resolved diagnostics log size, clamped to the accepted range.
    #[must_use]
    pub fn event_log_capacity(&self) -> EventLogCapacity {
        EventLogCapacity::new(
            self.diagnostics_capacity
                .unwrap_or(DEFAULT_EVENT_LOG_CAPACITY),
        )
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads settings from `path`. Unparseable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_else(|err| {
        tracing::warn!(path = %path.display(), %err, "ignoring unreadable settings");
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
