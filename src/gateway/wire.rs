//! GraphQL wire format for the Top Shot public API.
//!
//! Request/response envelopes plus the three operation documents and
//! their response payload shapes. Every field the server may omit is an
//! explicit `Option` here; defaults are applied only when the gateway
//! maps these into domain records.

use serde::{Deserialize, Serialize};

/// Roster list query.
pub(crate) const PLAYER_LIST_QUERY: &str = "\
query PlayerList {
  allPlayers {
    data {
      id
      name
    }
  }
}";

/// Per-player detail query.
pub(crate) const PLAYER_DETAILS_QUERY: &str = "\
query PlayerDetails($playerId: ID!) {
  getPlayerDataWithCurrentStats(input: { playerID: $playerId }) {
    playerData {
      firstName
      lastName
      jerseyNumber
      currentTeamName
      position
    }
  }
}";

/// Minted-moments search by owner address.
pub(crate) const MINTED_MOMENTS_QUERY: &str = "\
query SearchMintedMoments($ownerFlowAddress: String) {
  searchMintedMoments(input: { filters: { byOwnerFlowAddress: [$ownerFlowAddress] } }) {
    data {
      searchSummary {
        data {
          data {
            ... on MintedMoment {
              flowSerialNumber
              assetPathPrefix
              tier
              play {
                stats {
                  playerName
                }
              }
            }
          }
        }
      }
    }
  }
}";

/// Outbound request envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphQlRequest<'a> {
    pub operation_name: &'a str,
    pub query: &'a str,
    pub variables: serde_json::Value,
}

/// Inbound response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorEntry>>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlErrorEntry {
    #[serde(default)]
    pub message: String,
}

// --- PlayerList ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerListData {
    #[serde(default)]
    pub all_players: Option<PlayerListPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerListPage {
    #[serde(default)]
    pub data: Option<Vec<Option<PlayerListEntry>>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayerListEntry {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

// --- PlayerDetails ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerDetailsData {
    #[serde(default)]
    pub get_player_data_with_current_stats: Option<PlayerDataEnvelope>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerDataEnvelope {
    #[serde(default)]
    pub player_data: Option<PlayerDataFields>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlayerDataFields {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub current_team_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

// --- SearchMintedMoments ---
//
// The server nests the result list three levels deep; the names below
// follow the response JSON, not taste.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MintedMomentsData {
    #[serde(default)]
    pub search_minted_moments: Option<MomentSearch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MomentSearch {
    #[serde(default)]
    pub data: Option<MomentSearchData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MomentSearchData {
    #[serde(default)]
    pub search_summary: Option<SearchSummary>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchSummary {
    #[serde(default)]
    pub data: Option<SearchSummaryData>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchSummaryData {
    #[serde(default)]
    pub data: Option<Vec<Option<MomentEntry>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MomentEntry {
    #[serde(default)]
    pub flow_serial_number: Option<String>,
    #[serde(default)]
    pub asset_path_prefix: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub play: Option<MomentPlay>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MomentPlay {
    #[serde(default)]
    pub stats: Option<MomentPlayStats>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MomentPlayStats {
    #[serde(default)]
    pub player_name: Option<String>,
}
