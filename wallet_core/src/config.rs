//! Wallet configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

use stampwallet_ledger::{utc_offset, AddressMode, InterpretOptions};

use crate::WalletError;

/// Configuration for history display and ledger index access.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WalletConfig {
    /// JSON gateway in front of the ledger index. `None` means offline.
    #[serde(default)]
    pub index_url: Option<String>,

    /// Page size for index queries.
    #[serde(default = "default_max_results")]
    pub max_results: u64,

    /// Upper bound on pages fetched when loading a full history.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,

    /// Timezone for timestamps, in minutes east of UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// How counterparty addresses are shortened.
    #[serde(default)]
    pub address_mode: AddressMode,

    /// HTTP request timeout towards the index.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_max_results() -> u64 {
    100
}

fn default_max_pages() -> u32 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl WalletConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WalletError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Display options for the interpreter. Fails on an out-of-range UTC offset.
    pub fn interpret_options(
        &self,
        current_balance_e8s: Option<u64>,
    ) -> Result<InterpretOptions, WalletError> {
        Ok(InterpretOptions {
            zone: utc_offset(self.utc_offset_minutes)?,
            address_mode: self.address_mode,
            current_balance_e8s,
        })
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            index_url: None,
            max_results: default_max_results(),
            max_pages: default_max_pages(),
            utc_offset_minutes: 0,
            address_mode: AddressMode::default(),
            request_timeout_secs: default_request_timeout_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
