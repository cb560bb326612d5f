use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use super::LngLat;

/// Identificador de marcador (empieza en 1, nunca se reutiliza en una sesión)
pub type MarkerId = u64;

/// Marcador colocado por el usuario con un click en el mapa
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub id: MarkerId,
    pub lng: f64,
    pub lat: f64,
}

impl MarkerRecord {
    pub fn new(id: MarkerId, position: LngLat) -> Self {
        Self {
            id,
            lng: position.lng,
            lat: position.lat,
        }
    }

    pub fn position(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }

    /// Nombre compartido por el source y el layer del marcador en Mapbox
    pub fn layer_id(&self) -> String {
        format!("marker-{}", self.id)
    }

    /// Línea de texto para el panel: 5 decimales en lng/lat
    pub fn display_line(&self) -> String {
        format!("ID: {}, Lng: {:.5}, Lat: {:.5}", self.id, self.lng, self.lat)
    }

    /// Source GeoJSON con un único punto etiquetado con el id
    pub fn to_geojson_source(&self) -> Value {
        json!({
            "type": "geojson",
            "data": {
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": self.position().to_array(),
                },
                "properties": {
                    "id": self.id,
                },
            },
        })
    }
}
