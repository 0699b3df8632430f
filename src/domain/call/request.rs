//! Call request and response models exchanged with the gateway

use crate::domain::shared::value_objects::{AccountSid, CallSid, PhoneNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outbound call request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundCallRequest {
    /// Destination number
    pub to: PhoneNumber,
    /// Origin number
    pub from: PhoneNumber,
    /// TwiML URL fetched once the callee answers
    pub url: String,
}

impl OutboundCallRequest {
    pub fn new(to: PhoneNumber, from: PhoneNumber, url: impl Into<String>) -> Self {
        Self {
            to,
            from,
            url: url.into(),
        }
    }
}

/// Account as reported by the vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub sid: AccountSid,
    pub friendly_name: Option<String>,
    pub status: Option<String>,
}

/// Call accepted by the vendor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCall {
    pub sid: CallSid,
    /// Vendor status at creation time, usually `queued`
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
