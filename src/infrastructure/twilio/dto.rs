//! Twilio REST wire formats

use crate::domain::call::request::{Account, PlacedCall};
use crate::domain::shared::value_objects::{AccountSid, CallSid};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /Accounts/{sid}.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResource {
    pub sid: String,
    #[serde(default)]
    pub friendly_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl From<AccountResource> for Account {
    fn from(resource: AccountResource) -> Self {
        Account {
            sid: AccountSid::new(resource.sid),
            friendly_name: resource.friendly_name,
            status: resource.status,
        }
    }
}

/// `POST /Accounts/{sid}/Calls.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallResource {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    /// RFC 2822, e.g. `Tue, 31 Aug 2010 20:36:28 +0000`
    #[serde(default)]
    pub date_created: Option<String>,
}

impl CallResource {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.date_created
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc2822(raw).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl From<CallResource> for PlacedCall {
    fn from(resource: CallResource) -> Self {
        let created_at = resource.created_at();
        PlacedCall {
            sid: CallSid::new(resource.sid),
            status: resource.status,
            created_at,
        }
    }
}

/// Error body Twilio returns with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
}
