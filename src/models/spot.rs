use serde::{Deserialize, Serialize};

/// Reservation state of a spot. `Reserved` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpotStatus {
    Available,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    pub id: i64,
    // Reservation key within an event, not globally unique
    pub name: String,
    pub status: SpotStatus,
    pub event_id: i64,
}

impl Spot {
    pub fn is_reserved(&self) -> bool {
        self.status == SpotStatus::Reserved
    }
}
