//! Configuration management
//!
//! Sources are layered: built-in defaults, then an optional TOML file,
//! then `THINQ_` environment variables (`THINQ_TWILIO__ACCOUNT_SID`,
//! `THINQ_CALL__CUSTOMER_NUMBER`, ...).

use crate::domain::call::CallConfiguration;
use crate::infrastructure::twilio::{ClientSettings, DEFAULT_API_BASE_URL};
use ::config::{ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_PREFIX: &str = "THINQ";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub twilio: TwilioConfig,
    pub call: CallConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Registered number calls originate from
    pub phone_number: String,
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"***")
            .field("phone_number", &self.phone_number)
            .field("api_base_url", &self.api_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallConfig {
    pub customer_number: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            twilio: TwilioConfig {
                account_sid: String::new(),
                auth_token: String::new(),
                phone_number: String::new(),
                api_base_url: DEFAULT_API_BASE_URL.to_string(),
                timeout_secs: 30,
            },
            call: CallConfig {
                customer_number: String::new(),
            },
        }
    }
}

impl Config {
    /// Load defaults, the file at `path` (if given) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(env.prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Reject configurations that cannot place a call.
    ///
    /// Only presence is checked; number formats are left to the vendor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("twilio.account_sid", &self.twilio.account_sid),
            ("twilio.auth_token", &self.twilio.auth_token),
            ("twilio.phone_number", &self.twilio.phone_number),
            ("call.customer_number", &self.call.customer_number),
        ];

        if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Message(format!("{} must be set", key)));
        }

        if self.twilio.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "twilio.timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Call configuration for the configured customer
    pub fn call_configuration(&self) -> CallConfiguration {
        CallConfiguration::new(
            self.call.customer_number.clone(),
            self.twilio.account_sid.clone(),
            self.twilio.auth_token.clone(),
            self.twilio.phone_number.clone(),
        )
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.twilio.api_base_url.clone(),
            timeout: Duration::from_secs(self.twilio.timeout_secs),
        }
    }
}
