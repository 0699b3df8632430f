//! Domain layer - Core business logic and rules
//!
//! This layer contains:
//! - Value Objects: Immutable objects without identity
//! - Domain Services: The call initiator
//! - Gateway Interfaces: Ports for the telephony provider

pub mod call;
pub mod shared;

// Re-export commonly used types
pub use shared::{CallError, Result};
