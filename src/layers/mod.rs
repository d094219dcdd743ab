pub mod marker;
pub mod road;

pub use marker::{Marker, MarkerKey, MarkerRole, MarkerSet};
pub use road::{LineStyle, RoadOverlay, RoadSegment, SerializableColor};
