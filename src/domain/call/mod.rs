//! Call bounded context - placing outbound calls

pub mod configuration;
pub mod gateway;
pub mod initiator;
pub mod request;

pub use configuration::CallConfiguration;
pub use gateway::VoiceGateway;
pub use initiator::{CallInitiator, TWIML_RESOURCE_URL};
pub use request::{Account, OutboundCallRequest, PlacedCall};
