//! Call configuration value object

use crate::domain::shared::value_objects::{AccountSid, AuthToken, PhoneNumber};

/// Everything needed to place one outbound call.
///
/// Built once and never mutated; an initiator owns its copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallConfiguration {
    customer_number: PhoneNumber,
    account_sid: AccountSid,
    auth_token: AuthToken,
    source_number: PhoneNumber,
}

impl CallConfiguration {
    pub fn new(
        customer_number: impl Into<String>,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        source_number: impl Into<String>,
    ) -> Self {
        Self {
            customer_number: PhoneNumber::new(customer_number),
            account_sid: AccountSid::new(account_sid),
            auth_token: AuthToken::new(auth_token),
            source_number: PhoneNumber::new(source_number),
        }
    }

    /// Number that will be dialed
    pub fn customer_number(&self) -> &PhoneNumber {
        &self.customer_number
    }

    pub fn account_sid(&self) -> &AccountSid {
        &self.account_sid
    }

    pub fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Twilio-registered number the call originates from
    pub fn source_number(&self) -> &PhoneNumber {
        &self.source_number
    }
}
