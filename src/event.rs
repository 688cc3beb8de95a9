use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::role::PlayerRole;
use crate::rules::{MoveRecord, MoveRequest};


// Socket events are a name plus a JSON payload. Here they are represented as
// `{"type": <name>, "data": <payload>}`.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerEvent {
    #[serde(rename = "playerRole")]
    PlayerRole(PlayerRole),
    // A move made by the opponent. The server relays the whole move object; only the
    // from/to/promotion part is needed to replay it.
    #[serde(rename = "move")]
    Move(MoveRequest),
    // FEN of the authoritative position.
    #[serde(rename = "boardState")]
    BoardState(String),
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientEvent {
    #[serde(rename = "move")]
    Move(MoveRecord),
}

impl ServerEvent {
    pub fn from_socket_message(name: &str, payload: &str) -> Result<Self, serde_json::Error> {
        let data: serde_json::Value = serde_json::from_str(payload)?;
        serde_json::from_value(json!({ "type": name, "data": data }))
    }
}

impl ClientEvent {
    pub fn socket_name(&self) -> &'static str {
        match self {
            ClientEvent::Move(_) => "move",
        }
    }

    pub fn payload_json(&self) -> Result<String, serde_json::Error> {
        match self {
            ClientEvent::Move(record) => serde_json::to_string(record),
        }
    }
}
