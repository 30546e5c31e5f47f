//! Gateway configuration.
//!
//! All fixed strings the gateway needs (endpoint URL, the identifying
//! `User-Agent` value, and the owner address used for moment searches)
//! are supplied here at construction time. There is no environment or
//! file surface; the consumer builds a config and hands it over.

/// Production GraphQL endpoint.
pub const TOP_SHOT_GRAPHQL_URL: &str = "https://public-api.nbatopshot.com/graphql";

/// The public API asks clients to identify themselves with a contact
/// address in the `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = "kangkyu1111@gmail.com";

/// Flow address whose minted moments are listed by default.
pub const DEFAULT_OWNER_ADDRESS: &str = "63e0a50d19e02110";

/// Configuration for [`PlayerGateway`](crate::gateway::PlayerGateway).
///
/// # Example
///
/// ```
/// use topshot::GatewayConfig;
///
/// let config = GatewayConfig::default()
///     .with_user_agent("ops@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// GraphQL endpoint URL.
    pub endpoint: String,
    /// Value sent as the `User-Agent` header on every request.
    pub user_agent: String,
    /// Owner address used when no explicit address is given to a moments
    /// refresh.
    pub owner_address: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: TOP_SHOT_GRAPHQL_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            owner_address: DEFAULT_OWNER_ADDRESS.to_string(),
        }
    }
}

impl GatewayConfig {
    /// Create a config with the production defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the `User-Agent` value.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the default owner address for moment searches.
    pub fn with_owner_address(mut self, owner_address: impl Into<String>) -> Self {
        self.owner_address = owner_address.into();
        self
    }
}
