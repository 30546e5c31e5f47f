//! Remote Data Gateway for the Top Shot public API.
//!
//! Translates the three domain operations into GraphQL calls against a
//! single endpoint and maps the raw responses into the records in
//! [`crate::models`]. Every call is an independent, idempotent query:
//! no retry, no caching, no timeout override beyond what the injected
//! client is configured with.

mod wire;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::json;

use crate::adapters::ReqwestHttpClient;
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::models::{Moment, PlayerDetail, PlayerSummary};
use crate::traits::{Headers, HttpClient};

/// Suffix appended to `assetPathPrefix` to form a moment thumbnail URL.
const HERO_IMAGE_SUFFIX: &str = "Hero_2880_2880_Black.jpg?quality=60&width=480";

/// Client for the three Top Shot query operations.
///
/// Holds its configuration and an injected [`HttpClient`]; construct one
/// at startup and share it behind an `Arc`.
///
/// # Example
///
/// ```no_run
/// use topshot::{GatewayConfig, PlayerGateway};
///
/// # async fn run() -> Result<(), topshot::GatewayError> {
/// let gateway = PlayerGateway::with_default_client(GatewayConfig::default());
/// let roster = gateway.fetch_roster().await?;
/// println!("{} players", roster.len());
/// # Ok(())
/// # }
/// ```
pub struct PlayerGateway {
    config: GatewayConfig,
    http: Arc<dyn HttpClient>,
}

impl PlayerGateway {
    /// Create a gateway with an injected HTTP client.
    pub fn new(config: GatewayConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Create a gateway backed by a fresh reqwest client.
    pub fn with_default_client(config: GatewayConfig) -> Self {
        Self::new(config, Arc::new(ReqwestHttpClient::new()))
    }

    /// The configuration this gateway was built with.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Fetch the full roster, in server response order.
    ///
    /// Null entries are dropped; a missing name maps to `""`. Returns
    /// whatever the single response page contains; the roster query is
    /// never paginated.
    pub async fn fetch_roster(&self) -> Result<Vec<PlayerSummary>, GatewayError> {
        let data: Option<wire::PlayerListData> = self
            .execute("PlayerList", wire::PLAYER_LIST_QUERY, json!({}))
            .await?;

        let entries = data
            .and_then(|d| d.all_players)
            .and_then(|page| page.data)
            .unwrap_or_default();
        let roster: Vec<PlayerSummary> = entries.into_iter().flatten().map(map_summary).collect();

        tracing::debug!(players = roster.len(), "fetched roster");
        Ok(roster)
    }

    /// Fetch detail for one player.
    ///
    /// `Ok(None)` when the server has no matching record; otherwise the
    /// returned fields map 1:1 with absent fields left as `None`.
    pub async fn fetch_player_detail(
        &self,
        player_id: &str,
    ) -> Result<Option<PlayerDetail>, GatewayError> {
        let data: Option<wire::PlayerDetailsData> = self
            .execute(
                "PlayerDetails",
                wire::PLAYER_DETAILS_QUERY,
                json!({ "playerId": player_id }),
            )
            .await?;

        let fields = data
            .and_then(|d| d.get_player_data_with_current_stats)
            .and_then(|envelope| envelope.player_data);

        tracing::debug!(player_id, found = fields.is_some(), "fetched player detail");
        Ok(fields.map(|fields| map_detail(fields, player_id)))
    }

    /// Fetch the minted moments owned by `owner_address`.
    ///
    /// Null entries are dropped. `assetPathPrefix` plus a fixed suffix
    /// forms the thumbnail URL; a moment without a prefix keeps an empty
    /// thumbnail.
    pub async fn fetch_moments(&self, owner_address: &str) -> Result<Vec<Moment>, GatewayError> {
        let data: Option<wire::MintedMomentsData> = self
            .execute(
                "SearchMintedMoments",
                wire::MINTED_MOMENTS_QUERY,
                json!({ "ownerFlowAddress": owner_address }),
            )
            .await?;

        let entries = data
            .and_then(|d| d.search_minted_moments)
            .and_then(|search| search.data)
            .and_then(|data| data.search_summary)
            .and_then(|summary| summary.data)
            .and_then(|data| data.data)
            .unwrap_or_default();
        let moments: Vec<Moment> = entries.into_iter().flatten().map(map_moment).collect();

        tracing::debug!(owner_address, moments = moments.len(), "fetched moments");
        Ok(moments)
    }

    /// POST one operation and peel the response envelope.
    ///
    /// `Ok(None)` means the server answered `data: null` without errors;
    /// callers degrade that to an empty list or a missing record.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &'static str,
        variables: serde_json::Value,
    ) -> Result<Option<T>, GatewayError> {
        let request = wire::GraphQlRequest {
            operation_name: operation,
            query,
            variables,
        };
        let body = serde_json::to_string(&request)?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("User-Agent".to_string(), self.config.user_agent.clone());

        let response = self.http.post(&self.config.endpoint, &body, &headers).await?;

        if !response.is_success() {
            return Err(GatewayError::Server {
                status: response.status,
                message: response.text().unwrap_or_default(),
            });
        }

        let envelope: wire::GraphQlResponse<T> = response.json()?;
        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                tracing::warn!(operation, count = errors.len(), "GraphQL errors in response");
                return Err(GatewayError::GraphQl {
                    messages: errors.into_iter().map(|e| e.message).collect(),
                });
            }
        }

        Ok(envelope.data)
    }
}

fn map_summary(entry: wire::PlayerListEntry) -> PlayerSummary {
    PlayerSummary {
        id: entry.id,
        name: entry.name.unwrap_or_default(),
    }
}

fn map_detail(fields: wire::PlayerDataFields, player_id: &str) -> PlayerDetail {
    PlayerDetail {
        id: player_id.to_string(),
        first_name: fields.first_name,
        last_name: fields.last_name,
        jersey_number: fields.jersey_number,
        team_name: fields.current_team_name,
        position: fields.position,
    }
}

fn map_moment(entry: wire::MomentEntry) -> Moment {
    Moment {
        player_title: entry
            .play
            .and_then(|play| play.stats)
            .and_then(|stats| stats.player_name)
            .unwrap_or_default(),
        tier_name: entry.tier.unwrap_or_default(),
        serial_number: entry.flow_serial_number.unwrap_or_default(),
        thumbnail_url: entry
            .asset_path_prefix
            .map(|prefix| format!("{}{}", prefix, HERO_IMAGE_SUFFIX))
            .unwrap_or_default(),
    }
}
