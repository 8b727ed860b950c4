use serde::{Deserialize, Serialize};

/// Expense category as stored by the backend. `name` is the raw key
/// (`coffee`, `transport`, ...), not a display label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
