use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub organization: String,
    pub date: String,
    // Smallest currency unit
    pub price: i64,
    pub rating: String,
    pub image_url: String,
    pub created_at: String,
    pub location: String,
}
