//! Configuration for the overlay's data sources and refresh behavior
//!
//! All defaults carry the production endpoints and tuning values; hosts
//! override individual fields for tests or alternative deployments.

use crate::core::geo::LatLngBounds;
use std::time::Duration;

/// Transit stop pin source (EPSG:3857 pin endpoint)
#[derive(Debug, Clone, PartialEq)]
pub struct TransitSourceOptions {
    pub endpoint: String,
    /// Pin categories requested from the endpoint
    pub pin_types: String,
    /// Requested bbox corners are snapped outward to this grid, in meters,
    /// so that nearby viewports share cacheable requests
    pub grid_snap_m: f64,
}

impl Default for TransitSourceOptions {
    fn default() -> Self {
        Self {
            endpoint: "https://www.dvb.de/apps/map/pins".to_string(),
            pin_types: "stop".to_string(),
            grid_snap_m: 1000.0,
        }
    }
}

/// Bike-share live feed source
#[derive(Debug, Clone, PartialEq)]
pub struct BikeshareSourceOptions {
    pub endpoint: String,
    /// City to select from the live document
    pub city_uid: u64,
    pub domain: String,
    /// Bike type counted when deciding whether a place is shown
    pub flex_bike_type: String,
}

impl Default for BikeshareSourceOptions {
    fn default() -> Self {
        Self {
            endpoint: "https://maps.nextbike.net/maps/nextbike-live.json".to_string(),
            city_uid: 685,
            domain: "dx".to_string(),
            flex_bike_type: "196".to_string(),
        }
    }
}

/// Periodic bike-share refresh
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOptions {
    pub interval: Duration,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(300),
        }
    }
}

/// Top-level overlay configuration
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayOptions {
    pub transit: TransitSourceOptions,
    pub bikeshare: BikeshareSourceOptions,
    pub refresh: RefreshOptions,
    /// View shown when neither the fragment nor the bike-share feed supplies
    /// bounds (the federal territory extent)
    pub default_bounds: LatLngBounds,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            transit: TransitSourceOptions::default(),
            bikeshare: BikeshareSourceOptions::default(),
            refresh: RefreshOptions::default(),
            default_bounds: LatLngBounds::from_coords(
                47.0 + 16.0 / 60.0 + 15.0 / 3600.0,
                5.0 + 52.0 / 60.0 + 1.0 / 3600.0,
                55.0 + 3.0 / 60.0 + 33.0 / 3600.0,
                15.0 + 2.0 / 60.0 + 37.0 / 3600.0,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_default_bounds_cover_expected_extent() {
        let options = OverlayOptions::default();
        assert!(options.default_bounds.contains(&LatLng::new(51.05, 13.74)));
        assert!(!options.default_bounds.contains(&LatLng::new(48.2, 16.4)));
    }

    #[test]
    fn test_default_refresh_interval() {
        assert_eq!(RefreshOptions::default().interval, Duration::from_secs(300));
    }
}
