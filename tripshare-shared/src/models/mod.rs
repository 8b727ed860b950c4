pub mod auth;
pub mod category;
pub mod conversation;
pub mod currency;
pub mod expense;
pub mod trip;
pub mod user;

pub use auth::{LoginRequest, LoginResponse};
pub use category::Category;
pub use conversation::{Conversation, Message};
pub use currency::Currency;
pub use expense::Expense;
pub use trip::{DayOfTrip, Trip, TripActivity, TripInvite, TripParticipant};
pub use user::UserProfile;
