//! Overlay composition flows
//!
//! Ties the data sources to the marker window the way the host drives them:
//! stops accumulate across viewport moves and are deduplicated by id, while
//! the bike-share population is rebuilt wholesale on every refresh.

use crate::core::geo::LatLngBounds;
use crate::data::bikeshare::BikePlace;
use crate::data::transit::{PinSource, StopPin};
use crate::data::StopIndex;
use crate::layers::window::{Marker, MarkerWindow};
use crate::Result;

/// One viewport-change cycle for the stop layer: re-partition the existing
/// markers, fetch pins for the new viewport, and add a marker for every stop
/// not seen before. `make_marker` allocates the host's visual resource.
/// Returns the number of markers added.
pub async fn sync_stop_markers<S, F>(
    source: &S,
    index: &mut StopIndex,
    window: &mut MarkerWindow,
    viewport: &LatLngBounds,
    mut make_marker: F,
) -> Result<usize>
where
    S: PinSource + ?Sized,
    F: FnMut(&StopPin) -> Marker,
{
    window.update_active(viewport);

    let mut added = 0;
    for stop in source.fetch_pins(viewport).await? {
        if !index.insert(stop.clone()) {
            continue;
        }
        let marker = make_marker(&stop);
        window.add(marker, Some(viewport));
        added += 1;
    }
    Ok(added)
}

/// One refresh cycle for the bike layer: drop the previous population and
/// rebuild it from `places`, keeping only places with at least one bike of
/// `flex_bike_type`, then partition against the viewport. Returns the number
/// of markers created.
pub fn rebuild_bike_markers<F>(
    window: &mut MarkerWindow,
    places: &[BikePlace],
    flex_bike_type: &str,
    viewport: &LatLngBounds,
    mut make_marker: F,
) -> usize
where
    F: FnMut(&BikePlace) -> Marker,
{
    window.clear();

    let mut created = 0;
    for place in places {
        if place.available_of_type(flex_bike_type) == 0 {
            continue;
        }
        window.add(make_marker(place), None);
        created += 1;
    }
    window.update_active(viewport);
    created
}
