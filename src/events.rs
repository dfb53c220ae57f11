use serde::{Deserialize, Serialize};

/// Event received from a connected client over the realtime socket
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    /// Join a room by code, creating it if needed
    #[serde(rename = "join room")]
    JoinRoom { room: String },

    /// Opaque WebRTC negotiation payload for one peer
    #[serde(rename = "signal")]
    Signal { to: String, signal: serde_json::Value },

    /// Recognized speech for a room, produced by the client's STT engine
    #[serde(rename = "recognized text")]
    RecognizedText { room: String, text: String },

    /// Request the stored summary for a room code
    #[serde(rename = "get summary")]
    GetSummary { room: String },
}

/// Event pushed to a connected client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    /// Sent once to a joining participant: peers already in the room,
    /// in join order
    #[serde(rename = "existing users")]
    ExistingUsers { users: Vec<String> },

    #[serde(rename = "user joined")]
    UserJoined { id: String },

    #[serde(rename = "user left")]
    UserLeft { id: String },

    /// Relayed negotiation payload, tagged with the sender
    #[serde(rename = "signal")]
    Signal { from: String, signal: serde_json::Value },

    /// Chat-style rebroadcast of recognized speech to room peers
    #[serde(rename = "new message")]
    NewMessage { from: String, text: String },

    /// Summary lookup result, including not-found/expired sentinels
    #[serde(rename = "summary received")]
    SummaryReceived {
        #[serde(rename = "roomCode")]
        room_code: String,
        #[serde(rename = "summaryText")]
        summary_text: String,
    },
}
