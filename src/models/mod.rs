//! Domain records mapped from GraphQL responses.
//!
//! These are plain values: the gateway applies the documented defaults
//! while mapping, so nothing here knows about the wire format.

mod moment;
mod player;

pub use moment::Moment;
pub use player::{PlayerDetail, PlayerSummary};
