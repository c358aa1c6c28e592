pub mod base;
pub mod window;

pub use base::{MarkerId, NullLayer, RenderLayer};
pub use window::{Marker, MarkerWindow};
