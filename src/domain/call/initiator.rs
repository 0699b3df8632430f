//! Outbound call initiator

use crate::domain::call::configuration::CallConfiguration;
use crate::domain::call::gateway::VoiceGateway;
use crate::domain::call::request::OutboundCallRequest;
use crate::domain::shared::error::CallError;
use crate::domain::shared::result::Result;
use crate::domain::shared::value_objects::CallSid;
use tracing::{debug, info, warn};

/// TwiML resource the callee is handed to once they answer
pub const TWIML_RESOURCE_URL: &str = "http://cris.viralearnings.com/twiml/get_response";

/// Places an outbound call that redirects the callee to
/// [`TWIML_RESOURCE_URL`] on answer.
///
/// Each initiator owns its gateway; nothing is shared between instances.
/// Calls are independent, and a failed attempt is never retried.
pub struct CallInitiator<G> {
    config: CallConfiguration,
    gateway: G,
}

impl<G: VoiceGateway> CallInitiator<G> {
    pub fn new(config: CallConfiguration, gateway: G) -> Self {
        Self { config, gateway }
    }

    pub fn config(&self) -> &CallConfiguration {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Check that the gateway resolves to a live account.
    ///
    /// Performs a network round-trip. Lookup errors count as invalid.
    pub async fn validate(&self) -> bool {
        match self.gateway.fetch_account().await {
            Ok(Some(account)) => {
                debug!("Account {} resolved", account.sid);
                true
            }
            Ok(None) => {
                warn!("Account {} not recognised", self.config.account_sid());
                false
            }
            Err(e) => {
                warn!(
                    "Account lookup for {} failed: {}",
                    self.config.account_sid(),
                    e
                );
                false
            }
        }
    }

    /// Build the request sent for this configuration
    pub fn outbound_request(&self) -> OutboundCallRequest {
        OutboundCallRequest::new(
            self.config.customer_number().clone(),
            self.config.source_number().clone(),
            TWIML_RESOURCE_URL,
        )
    }

    /// Place the call.
    ///
    /// Returns the vendor call SID untouched, or an error whose text is the
    /// vendor's message verbatim.
    pub async fn initiate_call(&self) -> Result<CallSid> {
        if !self.validate().await {
            return Err(CallError::InvalidAccount);
        }

        let request = self.outbound_request();
        info!("Calling {} from {}", request.to, request.from);

        match self.gateway.create_call(&request).await {
            Ok(placed) => {
                info!(
                    "Call {} created (status: {})",
                    placed.sid,
                    placed.status.as_deref().unwrap_or("unknown")
                );
                Ok(placed.sid)
            }
            Err(e) => {
                warn!("Call to {} failed ({:?}): {}", request.to, e.kind(), e);
                Err(e)
            }
        }
    }

    /// Flat form of [`initiate_call`](Self::initiate_call): the call SID on
    /// success, the error message otherwise.
    pub async fn call(&self) -> String {
        match self.initiate_call().await {
            Ok(sid) => sid.into_inner(),
            Err(e) => e.to_string(),
        }
    }
}
