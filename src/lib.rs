//! Engine for a time-scrubbable satellite globe: hourly position snapshots
//! cached with a dispatch-once policy, interpolation between bracketing
//! hours, geodetic projection, and wildfire marker normalization, plus the
//! CORS relay and JSON API that sit in front of the upstream feeds.

pub mod constellation;
pub mod cursor;
pub mod geo;
pub mod scene;
pub mod web;
pub mod wildfire;
