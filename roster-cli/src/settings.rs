//! `settings.json` loading and command-line overrides.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use roster_lib::FormatOptions;
use roster_lib::table::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

use crate::cli::GlobalArgs;
use crate::error::CliError;

/// Persistent CLI settings.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Date, placeholder and currency formatting.
    pub format: FormatOptions,

    /// Application root used to resolve CRUD routes.
    pub base_url: Option<String>,

    /// Bearer token sent with CRUD requests.
    pub bearer_token: Option<String>,

    /// Rows per page in `roster table`.
    ///
    /// Default: 10
    pub page_size: usize,

    /// Request timeout in seconds.
    ///
    /// Default: 30
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: FormatOptions::default(),
            base_url: None,
            bearer_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, CliError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(CliError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let settings = serde_json::from_str(&contents).map_err(|source| CliError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `--config` if given, else from the platform config dir.
    pub fn load(explicit: Option<&PathBuf>) -> Result<Self, CliError> {
        match explicit.cloned().or_else(crate::paths::settings_file) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Apply flags given on the command line.
    pub fn apply(mut self, args: &GlobalArgs) -> Self {
        if let Some(locale) = args.locale {
            self.format.locale = locale.into();
        }
        if let Some(placeholder) = &args.placeholder {
            self.format.placeholder = placeholder.clone();
        }
        if let Some(currency) = &args.currency {
            self.format.currency = currency.clone();
        }
        if let Some(base_url) = &args.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(token) = &args.token {
            self.bearer_token = Some(token.clone());
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
