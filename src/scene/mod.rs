mod frame;
mod hover;

pub use frame::{place_markers, FireMarker, Frame, GLOBE_RADIUS};
pub use hover::{hover_label, HoverObserver, HoverState};
