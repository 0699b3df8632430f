//! thinq-dialer - outbound Twilio calls handed to a TwiML voice flow
//!
//! Places a call to a customer from a Twilio-registered number; once the
//! customer answers, Twilio fetches call instructions from a fixed remote
//! TwiML resource.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use domain::call::{CallConfiguration, CallInitiator, TWIML_RESOURCE_URL};
pub use domain::shared::error::{CallError, ErrorKind};
pub use domain::shared::result::Result;
