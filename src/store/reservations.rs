use tracing::{debug, info};

use crate::error::ServiceError;
use crate::models::{Spot, SpotStatus};
use crate::store::Store;

impl Store {
    /// Reserves the spot named `spot_name` under `event_id`.
    ///
    /// The lookup, status check and write run under one write lock, so of
    /// any number of concurrent callers for the same spot exactly one
    /// succeeds and the rest see `Conflict`. Names are matched exactly; if an
    /// event carries duplicate names the first one in dataset order is used.
    pub fn reserve(&self, event_id: i64, spot_name: &str) -> Result<Spot, ServiceError> {
        let mut data = self.write();

        let spot = data
            .spots
            .iter_mut()
            .find(|spot| spot.event_id == event_id && spot.name == spot_name)
            .ok_or_else(|| {
                debug!("Spot {:?} not found for event {}", spot_name, event_id);
                ServiceError::SpotNotFound
            })?;

        if spot.is_reserved() {
            debug!("Spot {} (event {}) is already reserved", spot.id, event_id);
            return Err(ServiceError::Conflict);
        }

        spot.status = SpotStatus::Reserved;
        info!("Spot {} {:?} reserved for event {}", spot.id, spot.name, event_id);
        Ok(spot.clone())
    }
}
