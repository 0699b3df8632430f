//! Infrastructure layer - Adapters for external systems

pub mod twilio;
