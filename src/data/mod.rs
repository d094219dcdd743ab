pub mod overpass;

pub use overpass::{highway_query, parse_roads, OverpassResponse};
