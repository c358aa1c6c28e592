/// Opaque handle to a marker's visual resource.
///
/// The handle is allocated by the host when it builds the marker's visual
/// (icon, circle, popup binding) and is only ever passed back to the host's
/// [`RenderLayer`]; this crate never creates or destroys the resource behind
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(u64);

impl MarkerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MarkerId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Attach/detach seam to the host's render layer.
///
/// Attaching the same handle twice, or detaching a handle that is not
/// attached, never happens through [`MarkerWindow`](crate::MarkerWindow);
/// implementations may rely on calls being balanced.
pub trait RenderLayer {
    fn attach(&mut self, marker: MarkerId);
    fn detach(&mut self, marker: MarkerId);
}

/// Render layer that drops every call, for hosts that only need the
/// partition bookkeeping (e.g. headless tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLayer;

impl RenderLayer for NullLayer {
    fn attach(&mut self, _marker: MarkerId) {}
    fn detach(&mut self, _marker: MarkerId) {}
}
