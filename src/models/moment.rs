use serde::{Deserialize, Serialize};

/// A user-owned digital collectible associated with a player.
///
/// Read-only; every field falls back to `""` when the source field is
/// absent from the response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moment {
    /// Name of the player the moment captures
    pub player_title: String,
    /// Rarity tier name as reported by the server
    pub tier_name: String,
    /// Serial number within the edition
    pub serial_number: String,
    /// Fully-formed thumbnail URL, or `""` when the asset path is missing
    pub thumbnail_url: String,
}
