//! Twilio REST client

use super::dto::{AccountResource, ApiErrorBody, CallResource};
use crate::domain::call::configuration::CallConfiguration;
use crate::domain::call::gateway::VoiceGateway;
use crate::domain::call::initiator::CallInitiator;
use crate::domain::call::request::{Account, OutboundCallRequest, PlacedCall};
use crate::domain::shared::error::CallError;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::{AccountSid, AuthToken};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Production API root
pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com/2010-04-01";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP settings for [`TwilioRestClient`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Twilio REST client authenticated as one account
pub struct TwilioRestClient {
    http: Client,
    base_url: String,
    account_sid: AccountSid,
    auth_token: AuthToken,
}

impl TwilioRestClient {
    pub fn new(
        account_sid: AccountSid,
        auth_token: AuthToken,
        settings: ClientSettings,
    ) -> Result<Self> {
        // A zero timeout would fail every request
        let timeout = if settings.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            settings.timeout
        };

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CallError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            account_sid,
            auth_token,
        })
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    fn account_url(&self) -> String {
        format!("{}/Accounts/{}.json", self.base_url, self.account_sid)
    }

    fn calls_url(&self) -> String {
        format!("{}/Accounts/{}/Calls.json", self.base_url, self.account_sid)
    }

    async fn parse_body<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CallError::InvalidResponse(e.to_string()))
    }

    /// Turn a non-2xx response into [`CallError::Rejected`], keeping the
    /// vendor message verbatim. A body that cannot be read is a transport
    /// failure.
    async fn rejection(response: Response) -> CallError {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return CallError::from(e),
        };

        match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(error) => CallError::Rejected {
                status: status.as_u16(),
                code: error.code,
                message: error.message,
            },
            Err(_) => CallError::Rejected {
                status: status.as_u16(),
                code: None,
                message: status.to_string(),
            },
        }
    }
}

#[async_trait]
impl VoiceGateway for TwilioRestClient {
    async fn fetch_account(&self) -> Result<Option<Account>> {
        let url = self.account_url();
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .basic_auth(self.account_sid.as_str(), Some(self.auth_token.expose()))
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                debug!("Account lookup returned {}", response.status());
                Ok(None)
            }
            status if status.is_success() => {
                let resource: AccountResource = Self::parse_body(response).await?;
                Ok(Some(resource.into()))
            }
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn create_call(&self, request: &OutboundCallRequest) -> Result<PlacedCall> {
        let url = self.calls_url();
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .basic_auth(self.account_sid.as_str(), Some(self.auth_token.expose()))
            .form(&[
                ("To", request.to.as_str()),
                ("From", request.from.as_str()),
                ("Url", request.url.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let resource: CallResource = Self::parse_body(response).await?;
        Ok(resource.into())
    }
}

impl From<reqwest::Error> for CallError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CallError::InvalidResponse(err.to_string())
        } else {
            CallError::Transport(err.to_string())
        }
    }
}

impl CallInitiator<TwilioRestClient> {
    /// Build an initiator backed by its own Twilio client
    pub fn connect(config: CallConfiguration, settings: ClientSettings) -> Result<Self> {
        let client = TwilioRestClient::new(
            config.account_sid().clone(),
            config.auth_token().clone(),
            settings,
        )?;
        Ok(CallInitiator::new(config, client))
    }
}
