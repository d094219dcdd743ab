//! Overpass API query text and reply decoding
//!
//! Only the `out geom` reply shape is understood: every way carries its own
//! inline `geometry` array, so no node lookup is needed.

use serde::{Deserialize, Serialize};

use crate::{core::geo::LatLng, layers::road::RoadSegment, MapError, Result};

/// Query for every `highway`-tagged way within `radius_m` of `center`
pub fn highway_query(center: LatLng, radius_m: f64) -> String {
    format!(
        "[out:json]; (way[\"highway\"](around:{},{},{});); out geom;",
        radius_m, center.lat, center.lng
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,
    pub id: i64,
    #[serde(default)]
    pub geometry: Option<Vec<GeometryPoint>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<GeometryPoint> for LatLng {
    fn from(point: GeometryPoint) -> Self {
        LatLng::new(point.lat, point.lon)
    }
}

impl OverpassResponse {
    /// Projects each way with geometry into a road polyline.
    ///
    /// Elements without geometry, with fewer than two points, or with
    /// out-of-range coordinates cannot be drawn as a line and are skipped.
    pub fn into_segments(self) -> Vec<RoadSegment> {
        self.elements
            .into_iter()
            .filter_map(|element| {
                let geometry = element.geometry?;
                let coordinates = geometry.into_iter().map(LatLng::from).collect();
                match RoadSegment::new(element.id, coordinates) {
                    Ok(segment) => Some(segment),
                    Err(e) => {
                        log::debug!("skipping element {}: {}", element.id, e);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Decodes an Overpass JSON reply into road segments
pub fn parse_roads(body: &str) -> Result<Vec<RoadSegment>> {
    let response: OverpassResponse = serde_json::from_str(body).map_err(MapError::Serialization)?;
    Ok(response.into_segments())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_format() {
        let query = highway_query(LatLng::new(48.8566, 2.3522), 10_000.0);
        assert_eq!(
            query,
            "[out:json]; (way[\"highway\"](around:10000,48.8566,2.3522);); out geom;"
        );
    }

    #[test]
    fn test_parse_single_way() {
        let body = r#"{"elements":[{"id":1,"geometry":[{"lat":1,"lon":2},{"lat":3,"lon":4}]}]}"#;
        let roads = parse_roads(body).unwrap();
        assert_eq!(roads.len(), 1);
        assert_eq!(roads[0].id(), 1);
        assert_eq!(roads[0].coordinate_pairs(), vec![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn test_parse_skips_elements_without_geometry() {
        let body = r#"{
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 10, "lat": 48.0, "lon": 2.0},
                {"type": "way", "id": 11, "geometry": [{"lat": 48.0, "lon": 2.0}]},
                {"type": "way", "id": 12, "tags": {"highway": "primary"},
                 "geometry": [{"lat": 48.1, "lon": 2.1}, {"lat": 48.2, "lon": 2.2}, {"lat": 48.3, "lon": 2.3}]}
            ]
        }"#;
        let roads = parse_roads(body).unwrap();
        assert_eq!(roads.len(), 1);
        assert_eq!(roads[0].id(), 12);
        assert_eq!(roads[0].coordinates().len(), 3);
        assert_eq!(roads[0].coordinates()[2], LatLng::new(48.3, 2.3));
    }

    #[test]
    fn test_parse_skips_out_of_range_geometry() {
        let body = r#"{"elements":[
            {"id":20,"geometry":[{"lat":91.5,"lon":2.0},{"lat":48.0,"lon":2.0}]},
            {"id":21,"geometry":[{"lat":48.0,"lon":2.0},{"lat":48.1,"lon":2.1}]}
        ]}"#;
        let roads = parse_roads(body).unwrap();
        assert_eq!(roads.len(), 1);
        assert_eq!(roads[0].id(), 21);
    }

    #[test]
    fn test_parse_empty_and_missing_elements() {
        assert!(parse_roads(r#"{"elements":[]}"#).unwrap().is_empty());
        assert!(parse_roads("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_roads("<html>rate limited</html>").is_err());
        assert!(parse_roads(r#"{"elements":[{"geometry":[]}]}"#).is_err());
    }
}
