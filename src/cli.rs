//! Command line interface of the `thinq-dialer` binary

use crate::application::DialerService;
use crate::config::Config;
use ::config::ConfigError;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "thinq-dialer.toml";

/// Place an outbound Twilio call that hands the callee to the TwiML flow
#[derive(Debug, Parser)]
#[command(name = "thinq-dialer", version)]
pub struct Args {
    /// Number to dial, overrides `call.customer_number`
    pub customer_number: Option<String>,

    /// TOML config file [default: ./thinq-dialer.toml when present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Load the configuration these arguments point at, apply the
    /// overrides and validate the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        let path = match &self.config {
            Some(path) => Some(path.as_path()),
            None => default_path.exists().then_some(default_path),
        };

        let config = Config::load(path)?;
        self.apply(config)
    }

    /// Apply the command line overrides to `config` and validate it
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(number) = &self.customer_number {
            config.call.customer_number = number.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Dial once. The call SID goes to `out`, a failure message to `err`.
pub async fn run(config: &Config, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    let dialer = match DialerService::from_config(config) {
        Ok(dialer) => dialer,
        Err(e) => {
            error!("Client setup failed: {}", e);
            let _ = writeln!(err, "{}", e);
            return ExitCode::FAILURE;
        }
    };

    match dialer.dial().await {
        Ok(sid) => {
            info!("Call placed: {}", sid);
            let _ = writeln!(out, "{}", sid);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Call failed ({:?})", e.kind());
            let _ = writeln!(err, "{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn complete() -> Config {
        let mut config = Config::default();
        config.twilio.account_sid = "AC123".to_string();
        config.twilio.auth_token = "token".to_string();
        config.twilio.phone_number = "+17543336811".to_string();
        config.call.customer_number = "+15551234567".to_string();
        config
    }

    #[test]
    fn test_help_is_not_a_number() {
        let err = Args::try_parse_from(["thinq-dialer", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Args::try_parse_from(["thinq-dialer", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Args::try_parse_from(["thinq-dialer", "--dail", "+15550000000"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_positional_number_overrides_config() {
        let args = Args::try_parse_from(["thinq-dialer", "+15550000000"]).unwrap();
        let config = args.apply(complete()).unwrap();

        assert_eq!(config.call.customer_number, "+15550000000");
    }

    #[test]
    fn test_configured_number_kept_without_argument() {
        let args = Args::try_parse_from(["thinq-dialer"]).unwrap();
        let config = args.apply(complete()).unwrap();

        assert_eq!(config.call.customer_number, "+15551234567");
    }

    #[test]
    fn test_missing_source_number_is_rejected() {
        let mut config = complete();
        config.twilio.phone_number.clear();

        let args = Args::try_parse_from(["thinq-dialer", "+15550000000"]).unwrap();
        assert!(args.apply(config).is_err());
    }

    #[test]
    fn test_config_flag_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[twilio]
account_sid = "ACfile"
auth_token = "token"
phone_number = "+17543336811"
"#
        )
        .unwrap();

        let path = file.path().to_string_lossy().to_string();
        let args =
            Args::try_parse_from(["thinq-dialer", "--config", &path, "+15550000000"]).unwrap();
        let config = args.resolve_config().unwrap();

        assert_eq!(config.twilio.account_sid, "ACfile");
        assert_eq!(config.call.customer_number, "+15550000000");
    }
}
