//! Interfaces to the outside world the orchestrator drives, plus the in-process
//! implementations the service uses.

pub mod geolocation;
pub mod list;
pub mod map;
pub mod storage;

pub use geolocation::{FixedPosition, Geolocator};
pub use list::{ListView, RecordedList};
pub use map::{MapView, RecordedMap};
pub use storage::{FileStorage, MemoryStorage, Storage};
