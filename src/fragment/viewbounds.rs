//! View-bounds codec and fragment binding
//!
//! The `bounds` parameter carries the visible viewport as
//! `"<lat>,<lng>;<lat>,<lng>"` (south-west corner, then north-east), each
//! coordinate rounded to six decimals and rendered in its minimal decimal
//! form. Hosts push the viewport on resize/zoom/pan and bind an apply
//! callback for navigation-driven restores.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::fragment::FragmentStore;
use crate::{MapError, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Fragment parameter holding the serialized viewport.
pub const BOUNDS_PARAM: &str = "bounds";

const COORD_SCALE: f64 = 1e6;

fn round_coord(x: f64) -> f64 {
    (x * COORD_SCALE).round() / COORD_SCALE
}

/// Serializes a viewport for the `bounds` parameter.
pub fn format_bounds(bounds: &LatLngBounds) -> String {
    format!(
        "{},{};{},{}",
        round_coord(bounds.south_west.lat),
        round_coord(bounds.south_west.lng),
        round_coord(bounds.north_east.lat),
        round_coord(bounds.north_east.lng),
    )
}

/// Parses one `"<lat>,<lng>"` corner.
pub fn parse_lat_lng(text: &str) -> Result<LatLng> {
    let mut parts = text.split(',');
    let (lat, lng) = match (parts.next(), parts.next(), parts.next()) {
        (Some(lat), Some(lng), None) => (lat, lng),
        _ => {
            return Err(MapError::ParseError(format!(
                "expected \"latitude,longitude\" not {:?}",
                text
            ))
            .into())
        }
    };
    let coord = LatLng::new(parse_coord(lat)?, parse_coord(lng)?);
    if !coord.is_valid() {
        return Err(
            MapError::InvalidCoordinates(format!("{},{}", coord.lat, coord.lng)).into(),
        );
    }
    Ok(coord)
}

fn parse_coord(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| MapError::ParseError(format!("expected a number not {:?}", text)).into())
}

/// Parses a full `"corner;corner"` viewport. Corners may arrive in any
/// order; the result is normalized.
pub fn parse_bounds(text: &str) -> Result<LatLngBounds> {
    let mut corners = text.split(';');
    let (a, b) = match (corners.next(), corners.next(), corners.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => {
            return Err(
                MapError::ParseError(format!("expected \"corner;corner\" not {:?}", text)).into(),
            )
        }
    };
    Ok(LatLngBounds::from_corners(
        parse_lat_lng(a)?,
        parse_lat_lng(b)?,
    ))
}

/// Writes the viewport into the store (no notification, no history entry).
pub fn push_bounds(store: &mut FragmentStore, bounds: &LatLngBounds) {
    store.set(BOUNDS_PARAM, &[format_bounds(bounds)]);
}

/// Subscribes `apply` to externally driven `bounds` changes and applies the
/// currently stored value once.
///
/// An empty value list is ignored. A malformed value on a later change is
/// logged and skipped (the view keeps its previous state); a malformed value
/// already present at bind time is returned as an error so the host can fall
/// back to its default view.
pub fn bind_bounds<F>(store: &mut FragmentStore, apply: F) -> Result<()>
where
    F: FnMut(LatLngBounds) + 'static,
{
    let apply = Rc::new(RefCell::new(apply));
    let subscribed = Rc::clone(&apply);
    store.on(BOUNDS_PARAM, move |_key, values| {
        let Some(text) = values.first() else {
            return;
        };
        match parse_bounds(text) {
            Ok(bounds) => (subscribed.borrow_mut())(bounds),
            Err(e) => log::warn!("ignoring malformed bounds parameter: {}", e),
        }
    });

    let current = match store.get_all(BOUNDS_PARAM).first() {
        Some(text) => parse_bounds(text)?,
        None => return Ok(()),
    };
    (apply.borrow_mut())(current);
    Ok(())
}
