//! Transit stop pin source
//!
//! The pin endpoint speaks EPSG:3857 and answers with a JSON array of
//! pipe-separated rows. Requested bbox corners are snapped outward to a
//! configurable grid so that nearby viewports produce identical, cacheable
//! requests.

use crate::core::config::TransitSourceOptions;
use crate::core::geo::{LatLng, LatLngBounds, Point};
use crate::data::http;
use crate::Result;
use async_trait::async_trait;

/// A fetched stop: stable id, display name, coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPin {
    pub id: String,
    pub name: String,
    pub position: LatLng,
}

/// Seam for anything that can produce stops for a viewport.
#[async_trait]
pub trait PinSource {
    async fn fetch_pins(&self, viewport: &LatLngBounds) -> Result<Vec<StopPin>>;
}

/// Live pin endpoint client.
pub struct TransitPins {
    options: TransitSourceOptions,
}

impl TransitPins {
    pub fn new(options: TransitSourceOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl PinSource for TransitPins {
    async fn fetch_pins(&self, viewport: &LatLngBounds) -> Result<Vec<StopPin>> {
        let (sw, ne) = snap_to_grid(viewport, self.options.grid_snap_m);
        let query = [
            ("coordinatesystem", "epsg3857".to_string()),
            ("showlines", "true".to_string()),
            ("swlat", format!("{}", sw.y)),
            ("swlng", format!("{}", sw.x)),
            ("nelat", format!("{}", ne.y)),
            ("nelng", format!("{}", ne.x)),
            ("pintypes", self.options.pin_types.clone()),
        ];
        let rows: Vec<String> = http::get_json(&self.options.endpoint, &query).await?;
        Ok(parse_pin_rows(&rows))
    }
}

/// Projects the viewport corners and snaps them outward to the grid.
fn snap_to_grid(viewport: &LatLngBounds, step: f64) -> (Point, Point) {
    let sw = viewport.south_west.to_mercator();
    let ne = viewport.north_east.to_mercator();
    (
        Point::new((sw.x / step).floor() * step, (sw.y / step).floor() * step),
        Point::new((ne.x / step).ceil() * step, (ne.y / step).ceil() * step),
    )
}

fn parse_pin_rows(rows: &[String]) -> Vec<StopPin> {
    let mut stops = Vec::with_capacity(rows.len());
    for row in rows {
        match parse_pin_row(row) {
            Some(stop) => stops.push(stop),
            None => log::warn!("cannot parse pin row {:?}", row),
        }
    }
    stops
}

/// Row layout: `id|…|…|name|y|x|…` with at least six fields; y and x are
/// EPSG:3857 meters.
fn parse_pin_row(row: &str) -> Option<StopPin> {
    let fields: Vec<&str> = row.split('|').collect();
    if fields.len() < 6 {
        return None;
    }
    let y: f64 = fields[4].parse().ok()?;
    let x: f64 = fields[5].parse().ok()?;
    Some(StopPin {
        id: fields[0].to_string(),
        name: fields[3].to_string(),
        position: LatLng::from_mercator(Point::new(x, y)),
    })
}
