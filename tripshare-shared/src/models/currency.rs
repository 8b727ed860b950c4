use serde::{Deserialize, Serialize};

/// Currency offered for budgets and expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub id: i64,

    /// ISO 4217 code, e.g. `EUR`.
    pub code: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub symbol: Option<String>,
}
