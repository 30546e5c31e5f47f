use serde::{Deserialize, Serialize};

/// One row in the roster list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// Unique player id
    pub id: String,
    /// Display name; `""` when the server omits it
    pub name: String,
}

/// Extended per-player attributes, fetched lazily.
///
/// Every field but `id` is optional: the server response is loosely typed
/// and any of them may be absent. Absence stays visible as `None` rather
/// than being papered over with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    /// Player id the detail was requested for
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<String>,
    /// Current team, when the player is on one
    pub team_name: Option<String>,
    pub position: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_serializes_camel_case() {
        let detail = PlayerDetail {
            id: "1630462".to_string(),
            first_name: Some("Aari".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["firstName"], "Aari");
        assert_eq!(json["teamName"], serde_json::Value::Null);
    }
}
