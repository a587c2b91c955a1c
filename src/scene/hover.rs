use crate::wildfire::WildfireRecord;

/// Pointer-hover protocol between the rendering layer and marker state:
/// enter returns the text to display, exit clears it. Implementations stay
/// decoupled from whichever raycast or event loop detects the pointer.
pub trait HoverObserver {
    fn on_hover_enter(&mut self, record: &WildfireRecord) -> String;
    fn on_hover_exit(&mut self);
}

/// Display text for a hovered fire marker.
pub fn hover_label(record: &WildfireRecord) -> String {
    let title = record.title.as_deref().unwrap_or("Wildfire");
    format!("{} at {:.2}°, {:.2}°", title, record.lat_deg, record.lon_deg)
}

/// Default observer: holds the label of the marker currently under the
/// pointer.
#[derive(Debug, Default)]
pub struct HoverState {
    current: Option<String>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl HoverObserver for HoverState {
    fn on_hover_enter(&mut self, record: &WildfireRecord) -> String {
        let label = hover_label(record);
        self.current = Some(label.clone());
        label
    }

    fn on_hover_exit(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>) -> WildfireRecord {
        WildfireRecord {
            id: "EONET_1".to_string(),
            title: title.map(str::to_string),
            date: None,
            lat_deg: 12.25,
            lon_deg: -56.5,
            alt_km: 0.0,
            size: 0.1,
        }
    }

    #[test]
    fn labels_carry_title_and_rounded_coordinates() {
        assert_eq!(
            hover_label(&record(Some("Creek Fire"))),
            "Creek Fire at 12.25°, -56.50°"
        );
    }

    #[test]
    fn untitled_records_fall_back_to_wildfire() {
        assert_eq!(hover_label(&record(None)), "Wildfire at 12.25°, -56.50°");
    }

    #[test]
    fn hover_state_tracks_enter_and_exit() {
        let mut hover = HoverState::new();
        assert!(hover.current().is_none());

        let shown = hover.on_hover_enter(&record(Some("Park Fire")));
        assert_eq!(hover.current(), Some(shown.as_str()));

        hover.on_hover_exit();
        assert!(hover.current().is_none());
    }
}
