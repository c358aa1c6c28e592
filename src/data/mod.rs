pub mod bikeshare;
pub mod http;
pub mod refresh;
pub mod transit;

use crate::data::transit::StopPin;
use crate::prelude::HashMap;

/// Caller-side dedup registry for fetched stops.
///
/// The pin endpoint returns overlapping result sets as the viewport moves;
/// the first fetch of an id wins and later occurrences are ignored, so a
/// re-fetched stop with a drifted coordinate does not move its marker.
#[derive(Default)]
pub struct StopIndex {
    stops: HashMap<String, StopPin>,
}

impl StopIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a stop. Returns `true` when the id was not seen before.
    pub fn insert(&mut self, stop: StopPin) -> bool {
        if self.stops.contains_key(&stop.id) {
            return false;
        }
        self.stops.insert(stop.id.clone(), stop);
        true
    }

    pub fn get(&self, id: &str) -> Option<&StopPin> {
        self.stops.get(id)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
