//! Headless data layer for the NBA Top Shot public GraphQL API.
//!
//! The crate has two halves: [`gateway::PlayerGateway`] issues the three
//! query operations (roster, per-player detail, minted moments) and maps
//! the responses into plain domain records, and [`store::PlayerStore`]
//! owns the screen state and publishes an immutable [`store::ViewState`]
//! snapshot after every command. Rendering is left to the consumer; this
//! crate ends at the snapshot.

pub mod adapters;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod store;
pub mod traits;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use gateway::PlayerGateway;
pub use models::{Moment, PlayerDetail, PlayerSummary};
pub use store::{PlayerStore, ViewState};
