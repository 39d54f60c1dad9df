//! # Form configuration — `registration.toml`
//!
//! Tunables for the registration wizard, read once when the app starts.
//!
//! ```toml
//! [defaults]
//! max_amount = "500000"     # initial budget slider value
//! monthly_savings = "5000"
//!
//! [submission]
//! delay_ms = 1000           # simulated gateway latency
//! gateway = "simulated"     # or "server" to call the server function
//! ```
//!
//! Every section and key is optional; a missing or empty file is the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `registration.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub defaults: DraftDefaults,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// Initial values for the preferences step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftDefaults {
    #[serde(default = "default_max_amount")]
    pub max_amount: String,
    #[serde(default = "default_monthly_savings")]
    pub monthly_savings: String,
}

fn default_max_amount() -> String {
    "500000".to_string()
}

fn default_monthly_savings() -> String {
    "5000".to_string()
}

impl Default for DraftDefaults {
    fn default() -> Self {
        Self {
            max_amount: default_max_amount(),
            monthly_savings: default_monthly_savings(),
        }
    }
}

/// Which gateway the UI submits through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    /// Wait `delay_ms` in the client and echo the request.
    #[default]
    Simulated,
    /// Call the `register_buyer` server function.
    Server,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Simulated gateway latency in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub gateway: GatewayKind,
}

fn default_delay_ms() -> u64 {
    1000
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            gateway: GatewayKind::default(),
        }
    }
}

impl FormConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "registration.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse from TOML, falling back to the defaults when the text is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}: {}", Self::filename(), e);
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to set the simulated delay.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.submission.delay_ms = delay_ms;
        self
    }

    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.submission.delay_ms)
    }
}
