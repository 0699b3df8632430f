//! Voice gateway port

use crate::domain::call::request::{Account, OutboundCallRequest, PlacedCall};
use crate::domain::shared::result::Result;
use async_trait::async_trait;

/// Telephony provider interface
///
/// Defined in the domain layer as a trait (port) and implemented
/// in the infrastructure layer (adapter).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoiceGateway: Send + Sync {
    /// Look up the account the gateway authenticates as.
    ///
    /// `Ok(None)` when the vendor does not recognise the credentials.
    async fn fetch_account(&self) -> Result<Option<Account>>;

    /// Ask the vendor to place an outbound call
    async fn create_call(&self, request: &OutboundCallRequest) -> Result<PlacedCall>;
}
