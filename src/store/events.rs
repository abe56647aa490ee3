use crate::error::ServiceError;
use crate::models::Event;
use crate::store::Store;

impl Store {
    // Все события в порядке загрузки
    pub fn list_events(&self) -> Vec<Event> {
        self.read().events.clone()
    }

    pub fn get_event_by_id(&self, id: i64) -> Result<Event, ServiceError> {
        self.read()
            .events
            .iter()
            .find(|event| event.id == id)
            .cloned()
            .ok_or(ServiceError::EventNotFound)
    }
}
