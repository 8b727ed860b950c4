use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Expense, UserProfile};

/// A trip with its budget and participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub participants: Vec<TripParticipant>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub image_src: String,
}

/// Membership of a user in a trip.
///
/// Revisions of the backend disagree on the name of the user relation, so both
/// `participant` and `user` are accepted on input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripParticipant {
    pub id: i64,
    #[serde(default)]
    pub trip: Option<Box<Trip>>,
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "user")]
    pub participant: Option<UserProfile>,
    #[serde(default)]
    pub image_src: String,
}

/// One calendar day of a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayOfTrip {
    pub id: i64,
    #[serde(default)]
    pub trip: Option<Box<Trip>>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub expenses: Option<Vec<Expense>>,
}

/// A planned stop or activity inside a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripActivity {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub sequence: Option<i32>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub day_id: Option<i64>,
}

/// Invitation from one user to another to join a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripInvite {
    pub id: i64,
    #[serde(default)]
    pub message: String,
    pub sender: UserProfile,
    pub recipient: UserProfile,
    pub trip: Trip,
    pub participant_status: String,
    pub invite_status: String,
}
