mod client;
mod error;
mod normalize;
mod types;

pub use client::WildfireClient;
pub use error::FeedError;
pub use normalize::{normalize, DEFAULT_MARKER_SIZE, MARKER_SIZE_SCALE};
pub use types::{EventFeed, FeedEvent, FeedGeometry, WildfireRecord};
