use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TripParticipant;

/// Group chat attached to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub participants: Option<Vec<TripParticipant>>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

/// A single chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub author: TripParticipant,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub pinned: bool,
}
