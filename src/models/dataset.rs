use serde::{Deserialize, Serialize};

use super::{Event, Spot};

// Shape of the data file read at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataFile {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub spots: Vec<Spot>,
}
