pub mod event;
pub mod spot;
pub mod dataset;
pub mod reservation;

pub use event::Event;
pub use spot::{Spot, SpotStatus};
pub use dataset::DataFile;
pub use reservation::{ReserveRequest, ReserveResponse};
