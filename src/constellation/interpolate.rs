use super::cache::SnapshotCache;
use super::source::SnapshotSource;
use crate::geo::GeoPosition;

/// Positions for a fractional hour, blended between the two bracketing
/// snapshots (fetched concurrently, each memoized by the cache).
///
/// `None` when `t` falls outside the 0-23 range (including NaN); never an
/// error. Integer hours return their snapshot verbatim, with no blending.
pub async fn positions_at<S: SnapshotSource>(
    cache: &SnapshotCache<S>,
    t: f64,
) -> Option<Vec<GeoPosition>> {
    if !(0.0..=23.0).contains(&t) {
        return None;
    }

    let lower = t.floor() as u32;
    let upper = t.ceil() as u32;
    if lower == upper {
        return Some(cache.snapshot(lower).await.positions.clone());
    }

    let (first, second) = tokio::join!(cache.snapshot(lower), cache.snapshot(upper));
    Some(blend(&first.positions, &second.positions, t - f64::from(lower)))
}

/// Component-wise lerp over the paired prefix; indices past the shorter list
/// pass through from the longer one unmodified. An empty side passes the
/// other through whole (blending against nothing would drag every satellite
/// toward zero).
///
/// Correspondence between lists is positional, and longitude is blended
/// linearly: a pair straddling the ±180° antimeridian sweeps the long way
/// around. Known artifact, kept as-is.
fn blend(first: &[GeoPosition], second: &[GeoPosition], delta: f64) -> Vec<GeoPosition> {
    if first.is_empty() {
        return second.to_vec();
    }
    if second.is_empty() {
        return first.to_vec();
    }

    let shared = first.len().min(second.len());
    let mut blended = Vec::with_capacity(first.len().max(second.len()));
    for (a, b) in first.iter().zip(second.iter()) {
        blended.push(GeoPosition {
            lat_deg: lerp(a.lat_deg, b.lat_deg, delta),
            lon_deg: lerp(a.lon_deg, b.lon_deg, delta),
            alt_km: lerp(a.alt_km, b.alt_km, delta),
        });
    }
    let longer = if first.len() >= second.len() {
        first
    } else {
        second
    };
    blended.extend_from_slice(&longer[shared..]);
    blended
}

fn lerp(a: f64, b: f64, delta: f64) -> f64 {
    a + (b - a) * delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellation::{FetchError, SnapshotCache, SnapshotSource};
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StaticSource {
        calls: AtomicUsize,
        hours: HashMap<u32, Vec<GeoPosition>>,
    }

    impl StaticSource {
        fn new(hours: Vec<(u32, Vec<[f64; 3]>)>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                hours: hours
                    .into_iter()
                    .map(|(hour, triples)| {
                        (
                            hour,
                            triples.into_iter().map(GeoPosition::from_triple).collect(),
                        )
                    })
                    .collect(),
            }
        }
    }

    impl SnapshotSource for StaticSource {
        fn fetch(
            &self,
            hour: u32,
        ) -> impl Future<Output = Result<Vec<GeoPosition>, FetchError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self
                .hours
                .get(&hour)
                .cloned()
                .ok_or(FetchError::Status { status: 404 });
            async move { result }
        }
    }

    #[tokio::test]
    async fn integer_hour_returns_its_snapshot_verbatim() {
        let cache = SnapshotCache::new(StaticSource::new(vec![(5, vec![[10.0, 20.0, 100.0]])]));

        let frame = positions_at(&cache, 5.0).await.unwrap();

        assert_eq!(frame, cache.snapshot(5).await.positions);
    }

    #[tokio::test]
    async fn midpoint_blends_each_component() {
        let cache = SnapshotCache::new(StaticSource::new(vec![
            (5, vec![[10.0, 20.0, 100.0]]),
            (6, vec![[20.0, 40.0, 200.0]]),
        ]));

        let frame = positions_at(&cache, 5.5).await.unwrap();

        assert_eq!(frame, vec![GeoPosition::new(15.0, 30.0, 150.0)]);
    }

    #[tokio::test]
    async fn empty_bracket_passes_the_other_side_through() {
        let cache = SnapshotCache::new(StaticSource::new(vec![
            (3, vec![]),
            (4, vec![[1.0, 2.0, 3.0]]),
        ]));

        let frame = positions_at(&cache, 3.5).await.unwrap();

        assert_eq!(frame, vec![GeoPosition::new(1.0, 2.0, 3.0)]);
    }

    #[tokio::test]
    async fn both_brackets_empty_yield_an_empty_frame() {
        let cache = SnapshotCache::new(StaticSource::new(vec![(3, vec![]), (4, vec![])]));

        let frame = positions_at(&cache, 3.5).await.unwrap();

        assert!(frame.is_empty());
    }

    #[tokio::test]
    async fn length_mismatch_passes_the_tail_through() {
        let cache = SnapshotCache::new(StaticSource::new(vec![
            (7, vec![[0.0, 0.0, 0.0], [10.0, 10.0, 10.0]]),
            (8, vec![[10.0, 10.0, 10.0]]),
        ]));

        let frame = positions_at(&cache, 7.5).await.unwrap();

        assert_eq!(
            frame,
            vec![
                GeoPosition::new(5.0, 5.0, 5.0),
                GeoPosition::new(10.0, 10.0, 10.0),
            ]
        );
    }

    #[tokio::test]
    async fn out_of_range_cursor_produces_nothing_and_fetches_nothing() {
        let source = Arc::new(StaticSource::new(vec![(0, vec![[1.0, 1.0, 1.0]])]));
        let cache = SnapshotCache::new(source.clone());

        assert!(positions_at(&cache, -1.0).await.is_none());
        assert!(positions_at(&cache, 24.0).await.is_none());
        assert!(positions_at(&cache, f64::NAN).await.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn blend_endpoints_reproduce_the_brackets() {
        let first = vec![GeoPosition::new(10.0, 20.0, 100.0)];
        let second = vec![GeoPosition::new(20.0, 40.0, 200.0)];

        assert_eq!(blend(&first, &second, 0.0), first);
        assert_eq!(blend(&first, &second, 1.0), second);
    }

    #[test]
    fn blended_components_stay_between_the_brackets() {
        let first = vec![GeoPosition::new(-10.0, 40.0, 120.0)];
        let second = vec![GeoPosition::new(30.0, 20.0, 80.0)];

        for delta in [0.25, 0.5, 0.75] {
            let out = blend(&first, &second, delta)[0];
            assert!((-10.0..=30.0).contains(&out.lat_deg));
            assert!((20.0..=40.0).contains(&out.lon_deg));
            assert!((80.0..=120.0).contains(&out.alt_km));
        }
    }

    #[test]
    fn antimeridian_blend_takes_the_long_way() {
        let first = vec![GeoPosition::new(0.0, 179.0, 0.0)];
        let second = vec![GeoPosition::new(0.0, -179.0, 0.0)];

        // Documented artifact: the midpoint passes through 0° instead of
        // crossing at ±180°.
        assert_eq!(blend(&first, &second, 0.5)[0].lon_deg, 0.0);
    }
}
