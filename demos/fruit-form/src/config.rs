//! Command line and keybinding configuration

use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;
use tui_select::{BindingAction, Keybindings};
use tui_select_widget::{default_keybindings, DropdownKey};

pub const DEFAULT_LABEL: &str = "Choose a fruit";

/// Fruit form - a dropdown select in the terminal
#[derive(Parser, Debug)]
#[command(name = "fruit-form")]
#[command(about = "Pick a fruit with an accessible dropdown select")]
pub struct Args {
    /// JSON document with the options ({"fruits": [{"id", "name"}, ...]})
    #[arg(long, default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/mocks/fruits.json"))]
    pub options: PathBuf,

    /// Simulated load latency in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub latency_ms: u64,

    /// Label shown before anything is chosen
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub label: String,

    /// JSON keybindings file with optional "dropdown" and "form" sections
    #[arg(long)]
    pub keys: Option<PathBuf>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log: Option<PathBuf>,
}

/// Form-level keys, resolved before the dropdown sees the event
#[derive(tui_select::BindingAction, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKey {
    FocusNext,
    FocusPrev,
    Submit,
    Retry,
    Quit,
}

pub fn default_form_keybindings() -> Keybindings<FormKey> {
    Keybindings::new()
        .with(FormKey::FocusNext, &["tab"])
        .with(FormKey::FocusPrev, &["shift+tab"])
        .with(FormKey::Submit, &["enter", "space"])
        .with(FormKey::Retry, &["r"])
        .with(FormKey::Quit, &["q", "ctrl+c"])
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read keybindings {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid keybindings {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unrecognized key {key:?} bound to {action}")]
    InvalidKey { action: &'static str, key: String },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct KeysFile {
    dropdown: Keybindings<DropdownKey>,
    form: Keybindings<FormKey>,
}

/// Effective key tables: defaults with the user's file merged on top
#[derive(Debug, Clone)]
pub struct KeyConfig {
    pub dropdown: Keybindings<DropdownKey>,
    pub form: Keybindings<FormKey>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            dropdown: default_keybindings(),
            form: default_form_keybindings(),
        }
    }
}

impl KeyConfig {
    /// Defaults, or defaults merged with the file at `path`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let user: KeysFile = serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        validate(&user.dropdown)?;
        validate(&user.form)?;

        let defaults = Self::default();
        Ok(Self {
            dropdown: Keybindings::merge(defaults.dropdown, user.dropdown),
            form: Keybindings::merge(defaults.form, user.form),
        })
    }
}

fn validate<K: BindingAction>(bindings: &Keybindings<K>) -> Result<(), ConfigError> {
    for action in K::all() {
        if let Some(key) = bindings
            .keys_for(*action)
            .iter()
            .find(|key| tui_select::parse_key_string(key).is_none())
        {
            return Err(ConfigError::InvalidKey {
                action: action.name(),
                key: key.clone(),
            });
        }
    }
    Ok(())
}
