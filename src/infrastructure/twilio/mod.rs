//! Twilio adapter for the voice gateway port

pub mod client;
pub mod dto;

pub use client::{ClientSettings, TwilioRestClient, DEFAULT_API_BASE_URL};
