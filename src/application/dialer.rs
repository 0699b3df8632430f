//! Dial-out use case

use crate::config::Config;
use crate::domain::call::{CallInitiator, VoiceGateway};
use crate::domain::shared::{CallSid, Result};
use crate::infrastructure::twilio::TwilioRestClient;
use tracing::info;

/// Places the configured call through a freshly built initiator
pub struct DialerService<G> {
    initiator: CallInitiator<G>,
}

impl DialerService<TwilioRestClient> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let initiator =
            CallInitiator::connect(config.call_configuration(), config.client_settings())?;
        Ok(Self { initiator })
    }
}

impl<G: VoiceGateway> DialerService<G> {
    pub fn new(initiator: CallInitiator<G>) -> Self {
        Self { initiator }
    }

    /// Place a call to the configured customer
    pub async fn dial(&self) -> Result<CallSid> {
        let config = self.initiator.config();
        info!(
            "Dialing {} via account {}",
            config.customer_number(),
            config.account_sid()
        );
        self.initiator.initiate_call().await
    }
}
