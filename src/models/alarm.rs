use serde::{Deserialize, Serialize};

// Which side of the quote the alarm watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Buying,
    Selling,
}

impl PriceType {
    /// Label used in notification texts ("Alış" / "Satış").
    pub fn label(&self) -> &'static str {
        match self {
            PriceType::Buying => "Alış",
            PriceType::Selling => "Satış",
        }
    }
}

// "above" | "below"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmCondition {
    Above,
    Below,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    pub id: String,

    pub code: String,
    // Display name captured at creation time, not re-synced afterwards.
    pub name: String,

    pub price_type: PriceType,
    pub condition: AlarmCondition,

    // Locale-formatted user input, parsed fresh on every evaluation.
    pub target_price: String,

    pub created_at: String,

    pub triggered: bool,
    pub triggered_at: Option<String>,
}
