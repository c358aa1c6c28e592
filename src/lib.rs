//! # netzplan
//!
//! A viewport-windowed overlay engine for public-transit and bike-share maps.
//!
//! The crate owns two small reactive mechanisms: a [`MarkerWindow`] that keeps
//! only the markers inside the visible viewport attached to the render layer,
//! and a [`FragmentStore`] that mirrors view state into the URL fragment and
//! notifies subscribers only on actual value changes. Rendering, DOM work and
//! the map widget itself are external collaborators reached through narrow
//! traits ([`RenderLayer`], [`FragmentSink`]).

pub mod core;
pub mod data;
pub mod fragment;
pub mod layers;
pub mod overlay;
pub mod prelude;
pub mod ui;

// Re-export public API
pub use crate::core::{
    config::OverlayOptions,
    geo::{LatLng, LatLngBounds, Point},
};

pub use crate::fragment::{FragmentSink, FragmentStore};

pub use crate::layers::{
    base::{MarkerId, RenderLayer},
    window::{Marker, MarkerWindow},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Data error: {0}")]
    Data(String),
}

/// Error type alias for convenience
pub type Error = MapError;
