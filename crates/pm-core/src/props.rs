//! Externally supplied widget props
//!
//! Props arrive from the host as raw JSON and are decoded into [`MapProps`].
//! The engine never mutates the place list; it filters and derives from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::geo::LngLat;

/// Label shown in the widget header when the host does not supply one.
pub const DEFAULT_LABEL: &str = "Classic";

#[derive(Debug, Error)]
pub enum PropsError {
    #[error("invalid widget props: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A point of interest supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Missing or non-finite coordinates keep the place off the map layer.
    #[serde(default)]
    pub coords: Option<LngLat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Place {
    /// Coordinates usable for markers and bounds, if any.
    pub fn valid_coords(&self) -> Option<LngLat> {
        self.coords.filter(LngLat::is_valid)
    }
}

/// The full props object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapProps {
    pub places: Vec<Place>,
    pub label: Option<String>,
}

impl MapProps {
    /// Decode the host's raw props value. `null` means "no props yet".
    pub fn from_value(value: Value) -> Result<Self, PropsError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Places with usable coordinates, in props order.
    pub fn valid_places(&self) -> impl Iterator<Item = (&str, LngLat)> {
        self.places
            .iter()
            .filter_map(|p| Some((p.id.as_str(), p.valid_coords()?)))
    }

    /// Denormalized coordinate list for the persisted snapshot.
    pub fn marker_coords(&self) -> Vec<LngLat> {
        self.valid_places().map(|(_, coords)| coords).collect()
    }

    /// The scalar label, defaulted when absent.
    pub fn label_or_default(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    /// Whether any place carries this id, valid coordinates or not.
    pub fn contains(&self, id: &str) -> bool {
        self.places.iter().any(|p| p.id == id)
    }

    /// Usable coordinates of the place with this id.
    pub fn coords_of(&self, id: &str) -> Option<LngLat> {
        self.places.iter().find(|p| p.id == id)?.valid_coords()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_places_and_label() {
        let props = MapProps::from_value(json!({
            "places": [
                {"id": "a", "name": "First", "coords": [1.0, 2.0]},
                {"id": "b", "name": "No coords"},
            ],
            "label": "Seasonal",
        }))
        .unwrap();

        assert_eq!(props.places.len(), 2);
        assert_eq!(props.label_or_default(), "Seasonal");
        assert_eq!(props.coords_of("a"), Some(LngLat::new(1.0, 2.0)));
        assert_eq!(props.coords_of("b"), None);
        assert!(props.contains("b"));
    }

    #[test]
    fn null_props_decode_to_empty() {
        let props = MapProps::from_value(Value::Null).unwrap();
        assert!(props.places.is_empty());
        assert_eq!(props.label_or_default(), DEFAULT_LABEL);
    }

    #[test]
    fn malformed_props_are_an_error() {
        assert!(MapProps::from_value(json!({"places": 3})).is_err());
    }

    #[test]
    fn valid_places_filters_missing_and_non_finite_coords() {
        let props = MapProps::from_value(json!({
            "places": [
                {"id": "ok", "coords": [0.0, 0.0]},
                {"id": "missing"},
                {"id": "nan", "coords": [null, 1.0]},
            ],
        }));
        // `null` inside the coords array fails f64 decoding for the whole value.
        assert!(props.is_err());

        let props = MapProps {
            places: vec![
                Place {
                    id: "ok".into(),
                    name: String::new(),
                    coords: Some(LngLat::new(0.0, 0.0)),
                    description: None,
                    rating: None,
                },
                Place {
                    id: "bad".into(),
                    name: String::new(),
                    coords: Some(LngLat::new(f64::NAN, 1.0)),
                    description: None,
                    rating: None,
                },
            ],
            label: None,
        };
        let ids: Vec<&str> = props.valid_places().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["ok"]);
        assert_eq!(props.marker_coords(), vec![LngLat::new(0.0, 0.0)]);
    }
}
