use serde::{Deserialize, Serialize};

use super::TripParticipant;

/// A spend recorded against a trip and shared among participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub name: String,
    /// Raw category key, see [`super::Category`].
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub participants: Vec<TripParticipant>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub image_src: String,
}
