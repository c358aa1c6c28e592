//! Viewport-windowed marker management
//!
//! A [`MarkerWindow`] owns an arbitrary number of point markers and keeps
//! exactly those inside the current viewport attached to the render layer.
//! Re-partitioning is two linear scans; with hundreds of markers this beats
//! maintaining a spatial index, and it guarantees that a marker whose
//! containment did not change is never detached and reattached.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::layers::base::{MarkerId, RenderLayer};

/// A point marker: a stable coordinate plus the opaque render handle the
/// host allocated for its visual resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    id: MarkerId,
    position: LatLng,
}

impl Marker {
    pub fn new(id: MarkerId, position: LatLng) -> Self {
        Self { id, position }
    }

    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }
}

/// Partitions markers into active (attached) and inactive (detached) against
/// the most recently supplied viewport.
///
/// Invariant: every marker is in exactly one of the two sets, and the active
/// set is exactly the set of handles attached to the layer. Markers are not
/// deduplicated; adding the same entity twice is the caller's bug to avoid.
pub struct MarkerWindow {
    active: Vec<Marker>,
    inactive: Vec<Marker>,
    layer: Box<dyn RenderLayer>,
}

impl MarkerWindow {
    pub fn new(layer: Box<dyn RenderLayer>) -> Self {
        Self {
            active: Vec::new(),
            inactive: Vec::new(),
            layer,
        }
    }

    /// Inserts a marker. When a viewport is supplied and contains the
    /// marker's coordinate the marker is attached immediately; otherwise it
    /// joins the inactive set without touching the layer.
    pub fn add(&mut self, marker: Marker, viewport: Option<&LatLngBounds>) {
        match viewport {
            Some(bounds) if bounds.contains(&marker.position) => {
                self.layer.attach(marker.id);
                self.active.push(marker);
            }
            _ => self.inactive.push(marker),
        }
    }

    /// Re-partitions every marker against `viewport`.
    ///
    /// Active markers that fell outside are detached and moved to inactive;
    /// inactive markers that came inside are attached and moved to active.
    /// Markers whose containment is unchanged are not touched, so calling
    /// this twice with the same viewport performs no layer operations the
    /// second time.
    pub fn update_active(&mut self, viewport: &LatLngBounds) {
        let active = std::mem::take(&mut self.active);
        for marker in active {
            if viewport.contains(&marker.position) {
                self.active.push(marker);
            } else {
                self.layer.detach(marker.id);
                self.inactive.push(marker);
            }
        }

        let inactive = std::mem::take(&mut self.inactive);
        for marker in inactive {
            if viewport.contains(&marker.position) {
                self.layer.attach(marker.id);
                self.active.push(marker);
            } else {
                self.inactive.push(marker);
            }
        }
    }

    /// Detaches every active marker and drops the whole population. Used by
    /// refresh cycles that rebuild the marker set from a fresh fetch.
    pub fn clear(&mut self) {
        for marker in self.active.drain(..) {
            self.layer.detach(marker.id);
        }
        self.inactive.clear();
    }

    pub fn active(&self) -> &[Marker] {
        &self.active
    }

    pub fn inactive(&self) -> &[Marker] {
        &self.inactive
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.inactive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty() && self.inactive.is_empty()
    }

    pub fn layer_mut(&mut self) -> &mut dyn RenderLayer {
        self.layer.as_mut()
    }
}
