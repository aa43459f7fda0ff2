//! Map viewport state.

use place_data::Place;
use tokio::sync::watch;

/// Default map centre: Andong city hall.
pub const ANDONG_CENTER: (f64, f64) = (36.5684, 128.7294);
/// Zoom used when the map first opens.
pub const DEFAULT_ZOOM: f64 = 13.0;
/// Zoom used when focusing a single place.
pub const PLACE_FOCUS_ZOOM: f64 = 16.0;
pub const MIN_ZOOM: f64 = 6.0;
pub const MAX_ZOOM: f64 = 19.0;

/// The visible map region: centre coordinates plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            latitude: ANDONG_CENTER.0,
            longitude: ANDONG_CENTER.1,
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// Holds the current map viewport.
pub struct ViewportState {
    tx: watch::Sender<MapViewport>,
}

impl ViewportState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(MapViewport::default());
        Self { tx }
    }

    pub fn viewport(&self) -> MapViewport {
        *self.tx.borrow()
    }

    pub fn set_center(&self, latitude: f64, longitude: f64) {
        self.tx.send_modify(|v| {
            v.latitude = latitude;
            v.longitude = longitude;
        });
    }

    /// Set the zoom level, clamped to the supported range.
    pub fn set_zoom(&self, zoom: f64) {
        self.tx
            .send_modify(|v| v.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM));
    }

    /// Centre the map on a place at focus zoom.
    pub fn focus_place(&self, place: &Place) {
        self.tx.send_replace(MapViewport {
            latitude: place.latitude,
            longitude: place.longitude,
            zoom: PLACE_FOCUS_ZOOM,
        });
    }

    /// Back to the Andong overview.
    pub fn reset(&self) {
        self.tx.send_replace(MapViewport::default());
    }

    pub fn subscribe(&self) -> watch::Receiver<MapViewport> {
        self.tx.subscribe()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}
