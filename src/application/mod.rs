//! Application layer - orchestrators over the domain and ports.

mod authorization;
mod credential_flow;
mod ingestion;
mod session_store;

pub use authorization::{AccessDecision, AdminGate, GateOutcome};
pub use credential_flow::{AuthenticationFailed, CredentialFlow};
pub use ingestion::{IngestionError, MediaIngestionGateway};
pub use session_store::{SessionStore, MEMBERSHIP_KEY, USER_KEY};
