use std::sync::Arc;

use tokio::sync::watch;

use super::source::SnapshotSource;
use crate::geo::GeoPosition;

pub const HOURS_PER_DAY: usize = 24;

/// Satellite positions recorded for one integer hour of the day.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub hour: u32,
    pub positions: Vec<GeoPosition>,
}

impl Snapshot {
    pub fn empty(hour: u32) -> Self {
        Self {
            hour,
            positions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
enum HourSlot {
    Idle,
    Loading,
    Ready(Arc<Snapshot>),
}

/// Non-blocking view of one cache slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotView {
    Idle,
    Loading,
    Ready(Arc<Snapshot>),
}

/// Session cache of hourly snapshots, one slot per hour of the day.
///
/// Each slot is fetched at most once: the first request moves it from `Idle`
/// to `Loading` and spawns the fetch, every later request joins the same
/// result. A failed or malformed fetch resolves the slot to an empty
/// snapshot and is not retried. Slots are never evicted.
pub struct SnapshotCache<S> {
    source: Arc<S>,
    slots: [watch::Sender<HourSlot>; HOURS_PER_DAY],
}

impl<S: SnapshotSource> SnapshotCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            slots: std::array::from_fn(|_| watch::channel(HourSlot::Idle).0),
        }
    }

    /// Dispatch the fetch for an hour unless it already happened.
    ///
    /// The check-and-set below is the only place slot state leaves `Idle`,
    /// and the spawned task is the only writer that completes its slot, so a
    /// fetch finishing late still lands in the hour it was dispatched for.
    /// Hours outside 0-23 are silently ignored.
    pub fn request(&self, hour: u32) {
        let Some(slot) = self.slots.get(hour as usize) else {
            return;
        };
        let dispatched = slot.send_if_modified(|state| {
            if matches!(state, HourSlot::Idle) {
                *state = HourSlot::Loading;
                true
            } else {
                false
            }
        });
        if !dispatched {
            return;
        }

        log::info!("Dispatching snapshot fetch for hour {:02}", hour);
        let source = self.source.clone();
        let slot = slot.clone();
        tokio::spawn(async move {
            let positions = match source.fetch(hour).await {
                Ok(positions) => {
                    log::debug!("Hour {:02} resolved with {} positions", hour, positions.len());
                    positions
                }
                Err(e) => {
                    log::warn!("Snapshot fetch for hour {:02} failed: {}", hour, e);
                    Vec::new()
                }
            };
            slot.send_replace(HourSlot::Ready(Arc::new(Snapshot { hour, positions })));
        });
    }

    /// Await the snapshot for an hour, dispatching the fetch on first use.
    /// Hours outside 0-23 resolve to an empty snapshot instead of failing.
    pub async fn snapshot(&self, hour: u32) -> Arc<Snapshot> {
        let Some(slot) = self.slots.get(hour as usize) else {
            return Arc::new(Snapshot::empty(hour));
        };
        self.request(hour);

        let mut rx = slot.subscribe();
        let ready = rx.wait_for(|state| matches!(state, HourSlot::Ready(_))).await;
        match ready.as_deref() {
            Ok(HourSlot::Ready(snapshot)) => snapshot.clone(),
            _ => Arc::new(Snapshot::empty(hour)),
        }
    }

    pub fn peek(&self, hour: u32) -> SlotView {
        match self.slots.get(hour as usize) {
            Some(slot) => match &*slot.borrow() {
                HourSlot::Idle => SlotView::Idle,
                HourSlot::Loading => SlotView::Loading,
                HourSlot::Ready(snapshot) => SlotView::Ready(snapshot.clone()),
            },
            None => SlotView::Idle,
        }
    }
}
