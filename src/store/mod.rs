//! View-state store.
//!
//! Owns one [`ViewState`] and publishes a new snapshot over a watch
//! channel after every command. Consumers render snapshots and issue
//! commands; they never mutate state directly.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::watch;

use crate::error::GatewayError;
use crate::gateway::PlayerGateway;
use crate::models::{Moment, PlayerDetail, PlayerSummary};

/// One immutable snapshot of everything the screen renders.
///
/// Created empty at store construction and replaced wholesale by each
/// command; observers never see a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Roster in server response order
    pub roster: Vec<PlayerSummary>,
    /// Detail for the most recently answered selection, `None` when the
    /// lookup found nothing
    pub selected_detail: Option<PlayerDetail>,
    /// Moments owned by the last refreshed address
    pub moments: Vec<Moment>,
    /// Favorited player ids; in-memory only, gone with the store
    pub favorites: HashSet<String>,
    /// Whether a fetch command is in flight
    pub is_loading: bool,
}

impl ViewState {
    /// Whether `player_id` is currently favorited.
    pub fn is_favorite(&self, player_id: &str) -> bool {
        self.favorites.contains(player_id)
    }
}

/// Store owning the screen state, commanded by the presentation layer.
///
/// Commands may run concurrently from multiple tasks; each publishes its
/// snapshot when its fetch completes. Overlapping [`select_player`]
/// calls are resolved last-response-wins; see that method.
///
/// [`select_player`]: PlayerStore::select_player
pub struct PlayerStore {
    gateway: Arc<PlayerGateway>,
    state_tx: watch::Sender<ViewState>,
}

impl PlayerStore {
    /// Create a store with an empty initial state.
    pub fn new(gateway: Arc<PlayerGateway>) -> Self {
        let (state_tx, _) = watch::channel(ViewState::default());
        Self { gateway, state_tx }
    }

    /// Subscribe to state snapshots.
    ///
    /// The receiver immediately holds the current snapshot and is marked
    /// changed after every command.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// Clone the current snapshot.
    pub fn snapshot(&self) -> ViewState {
        self.state_tx.borrow().clone()
    }

    /// Replace the roster with a fresh fetch.
    ///
    /// On failure the previous roster is left untouched, the loading flag
    /// is cleared, and the error is returned to the caller; nothing is
    /// retried here.
    pub async fn refresh_roster(&self) -> Result<(), GatewayError> {
        self.state_tx.send_modify(|state| state.is_loading = true);

        match self.gateway.fetch_roster().await {
            Ok(roster) => {
                tracing::debug!(players = roster.len(), "roster refreshed");
                self.state_tx.send_modify(|state| {
                    state.roster = roster;
                    state.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "roster refresh failed");
                self.state_tx.send_modify(|state| state.is_loading = false);
                Err(err)
            }
        }
    }

    /// Fetch detail for `player_id` and replace the selection with the
    /// result, including `None` when the server has no record.
    ///
    /// A newer call does not cancel an older in-flight one: whichever
    /// response arrives last overwrites the selection, regardless of call
    /// order.
    pub async fn select_player(&self, player_id: &str) -> Result<(), GatewayError> {
        self.state_tx.send_modify(|state| state.is_loading = true);

        match self.gateway.fetch_player_detail(player_id).await {
            Ok(detail) => {
                tracing::debug!(player_id, found = detail.is_some(), "player selected");
                self.state_tx.send_modify(|state| {
                    state.selected_detail = detail;
                    state.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(player_id, error = %err, "player detail fetch failed");
                self.state_tx.send_modify(|state| state.is_loading = false);
                Err(err)
            }
        }
    }

    /// Flip membership of `player_id` in the favorites set.
    ///
    /// Synchronous, no network. Applying it twice restores the original
    /// membership.
    pub fn toggle_favorite(&self, player_id: &str) {
        self.state_tx.send_modify(|state| {
            if !state.favorites.insert(player_id.to_string()) {
                state.favorites.remove(player_id);
            }
        });
    }

    /// Replace the moments list with a fresh fetch for `owner_address`.
    ///
    /// Same pattern as [`refresh_roster`](PlayerStore::refresh_roster):
    /// failure leaves the previous list untouched.
    pub async fn refresh_moments(&self, owner_address: &str) -> Result<(), GatewayError> {
        self.state_tx.send_modify(|state| state.is_loading = true);

        match self.gateway.fetch_moments(owner_address).await {
            Ok(moments) => {
                tracing::debug!(moments = moments.len(), "moments refreshed");
                self.state_tx.send_modify(|state| {
                    state.moments = moments;
                    state.is_loading = false;
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(owner_address, error = %err, "moments refresh failed");
                self.state_tx.send_modify(|state| state.is_loading = false);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_state_starts_empty() {
        let state = ViewState::default();
        assert!(state.roster.is_empty());
        assert!(state.selected_detail.is_none());
        assert!(state.moments.is_empty());
        assert!(state.favorites.is_empty());
        assert!(!state.is_loading);
    }

    #[test]
    fn is_favorite_checks_membership() {
        let mut state = ViewState::default();
        assert!(!state.is_favorite("237"));
        state.favorites.insert("237".to_string());
        assert!(state.is_favorite("237"));
    }
}
