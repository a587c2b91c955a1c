mod cache;
mod error;
mod interpolate;
mod source;

pub use cache::{Snapshot, SnapshotCache, SlotView, HOURS_PER_DAY};
pub use error::FetchError;
pub use interpolate::positions_at;
pub use source::{HttpSnapshotSource, SnapshotSource};
