//! Prelude module for common netzplan types and traits
//!
//! Re-exports the most commonly used types, traits, and functions for easy
//! importing with `use netzplan::prelude::*;`

pub use crate::core::{
    config::{BikeshareSourceOptions, OverlayOptions, RefreshOptions, TransitSourceOptions},
    geo::{LatLng, LatLngBounds, Point},
};

pub use crate::fragment::{codec::ParamMap, viewbounds, FragmentSink, FragmentStore};

pub use crate::layers::{
    base::{MarkerId, RenderLayer},
    window::{Marker, MarkerWindow},
};

pub use crate::data::{
    bikeshare::{BikeCity, BikePlace, BikeshareFeed},
    refresh::RefreshTask,
    transit::{PinSource, StopPin, TransitPins},
    StopIndex,
};

pub use crate::overlay::{rebuild_bike_markers, sync_stop_markers};

pub use crate::ui::{
    legend::LayerToggle,
    position::{LocationFix, PositionGlyph, PositionIndicator},
    selection::{StopSelection, TripQuery},
};

pub use crate::{Error as MapError, Result};

pub use std::{
    sync::Arc,
    time::{Duration, Instant},
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
