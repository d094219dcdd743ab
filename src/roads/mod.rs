pub mod loader;
pub mod source;

pub use loader::RoadLoader;
pub use source::{OverpassSource, RoadSource};
