//! GeoJSON feature assembly for usage locations.

use serde::Serialize;
use serde_json::{Map, Value};

use projection::reproject_in_place;
use rights_model::UsageLocation;
use water_common::{BoundingBox, Geometry, WaterError, WaterResult, SRID_WGS84};

/// Convert the stored "is this location physically real" flag into the
/// exposed "is virtual" property.
///
/// The polarity flip is intentional and lives only here: `Some(real)`
/// becomes `Some(!real)`, and an absent flag stays absent instead of
/// defaulting to either boolean.
pub fn exposed_virtual(stored_real: Option<bool>) -> Option<bool> {
    stored_real.map(|real| !real)
}

/// A GeoJSON Feature carrying one usage location.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_: String,

    pub id: String,

    /// Reprojected geometry; `null` for locations without one.
    pub geometry: Option<Geometry>,

    /// Every non-geometry attribute of the record, flattened.
    pub properties: Map<String, Value>,
}

/// A GeoJSON FeatureCollection with an accumulated bounding box.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,

    /// `[min_x, min_y, max_x, max_y]`; absent while the collection holds
    /// no geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,

    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// An empty collection with an uninitialized bounding box.
    pub fn empty() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            bbox: None,
            features: Vec::new(),
        }
    }

    /// Assemble a collection from usage locations.
    ///
    /// Each geometry is reprojected to WGS84 and extends the running
    /// bounding box, which adopts the first geometry's extent. Properties
    /// are the location serialized to a string-keyed map, with the stored
    /// reality flag surfacing as `isVirtual` (inverted polarity).
    pub fn from_usage_locations(locations: Vec<UsageLocation>) -> WaterResult<Self> {
        let mut bbox = BoundingBox::empty();
        let mut features = Vec::with_capacity(locations.len());

        for mut location in locations {
            let geometry = match location.geometry.take() {
                Some(mut geometry) => {
                    reproject_in_place(&mut geometry, SRID_WGS84)
                        .map_err(|e| WaterError::ProjectionError(e.to_string()))?;
                    bbox.extend_geometry(&geometry);
                    Some(geometry)
                }
                None => None,
            };

            let mut properties = match serde_json::to_value(&location)? {
                Value::Object(map) => map,
                other => {
                    return Err(WaterError::InternalError(format!(
                        "usage location serialized to non-object: {}",
                        other
                    )))
                }
            };
            if let Some(virtual_) = exposed_virtual(location.real) {
                properties.insert("isVirtual".to_string(), Value::Bool(virtual_));
            }

            features.push(Feature {
                type_: "Feature".to_string(),
                id: location.id.to_string(),
                geometry,
                properties,
            });
        }

        Ok(Self {
            type_: "FeatureCollection".to_string(),
            bbox: bbox.to_array(),
            features,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use water_common::SRID_STORAGE;

    fn location(id: i64, real: Option<bool>, geometry: Option<Geometry>) -> UsageLocation {
        UsageLocation {
            id,
            real,
            geometry,
            name: Some(format!("location {}", id)),
            ..Default::default()
        }
    }

    #[test]
    fn test_exposed_virtual_flips_polarity() {
        assert_eq!(exposed_virtual(Some(true)), Some(false));
        assert_eq!(exposed_virtual(Some(false)), Some(true));
        assert_eq!(exposed_virtual(None), None);
    }

    #[test]
    fn test_zero_locations_build_empty_collection() {
        let fc = FeatureCollection::from_usage_locations(Vec::new()).unwrap();
        assert!(fc.features.is_empty());
        assert_eq!(fc.bbox, None);

        let json = serde_json::to_value(&fc).unwrap();
        assert_eq!(json["type"], "FeatureCollection");
        assert!(json.get("bbox").is_none());
    }

    #[test]
    fn test_features_carry_reprojected_geometry() {
        let fc = FeatureCollection::from_usage_locations(vec![location(
            1,
            None,
            Some(Geometry::point(SRID_STORAGE, 550_000.0, 5_800_000.0)),
        )])
        .unwrap();

        let geometry = fc.features[0].geometry.as_ref().unwrap();
        assert_eq!(geometry.srid, SRID_WGS84);

        let bbox = fc.bbox.unwrap();
        assert!(bbox[0] > 9.0 && bbox[0] < 10.0, "lon {}", bbox[0]);
        assert!(bbox[1] > 52.0 && bbox[1] < 53.0, "lat {}", bbox[1]);
    }

    #[test]
    fn test_bbox_spans_all_features() {
        let fc = FeatureCollection::from_usage_locations(vec![
            location(1, None, Some(Geometry::point(SRID_WGS84, 9.0, 52.0))),
            location(2, None, Some(Geometry::point(SRID_WGS84, 10.0, 53.0))),
        ])
        .unwrap();

        assert_eq!(fc.bbox, Some([9.0, 52.0, 10.0, 53.0]));
    }

    #[test]
    fn test_properties_flattened_without_geometry() {
        let fc = FeatureCollection::from_usage_locations(vec![location(
            5,
            Some(true),
            Some(Geometry::point(SRID_WGS84, 9.5, 52.5)),
        )])
        .unwrap();

        let feature = &fc.features[0];
        assert_eq!(feature.id, "5");
        assert_eq!(feature.properties["name"], "location 5");
        assert_eq!(feature.properties["isVirtual"], false);
        assert!(!feature.properties.contains_key("geometry"));
    }

    #[test]
    fn test_absent_reality_flag_stays_absent() {
        let fc = FeatureCollection::from_usage_locations(vec![location(
            5,
            None,
            Some(Geometry::point(SRID_WGS84, 9.5, 52.5)),
        )])
        .unwrap();
        assert!(!fc.features[0].properties.contains_key("isVirtual"));
    }

    #[test]
    fn test_location_without_geometry_gets_null_geometry() {
        let fc = FeatureCollection::from_usage_locations(vec![location(3, None, None)]).unwrap();
        assert!(fc.features[0].geometry.is_none());
        assert_eq!(fc.bbox, None);

        let json = serde_json::to_value(&fc).unwrap();
        assert!(json["features"][0]["geometry"].is_null());
    }
}
