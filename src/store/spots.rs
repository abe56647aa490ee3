use crate::models::Spot;
use crate::store::Store;

impl Store {
    /// Spots belonging to `event_id`, in dataset order.
    ///
    /// An unknown event and an event without spots both yield an empty list.
    pub fn get_spots_by_event_id(&self, event_id: i64) -> Vec<Spot> {
        self.read()
            .spots
            .iter()
            .filter(|spot| spot.event_id == event_id)
            .cloned()
            .collect()
    }
}
