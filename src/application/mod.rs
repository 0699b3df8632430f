//! Application layer - Use cases
//!
//! Wires configuration into the domain and infrastructure layers.

pub mod dialer;

pub use dialer::DialerService;
