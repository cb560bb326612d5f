use serde::Serialize;
use serde_json::Value;
use crate::config::{AppConfig, MarkerConfig};
use crate::models::{LngLat, MarkerRecord};

/// Id de un listener de click registrado en el widget
pub type ListenerId = u32;

/// Callback de "mapa cargado" (se dispara una sola vez)
pub type ReadyCallback = Box<dyn FnOnce()>;

/// Callback de click con la coordenada geográfica del punto
pub type ClickCallback = Box<dyn FnMut(LngLat)>;

/// Widget de mapa de terceros (Mapbox GL JS en web)
///
/// El controlador del ciclo de vida es el único dueño del widget. El registro
/// de marcadores solo lo usa para dibujar y para (des)registrar su listener.
pub trait MapWidget {
    /// Registrar el callback de carga completa
    fn on_ready(&mut self, callback: ReadyCallback);

    /// Registrar un listener de click
    fn on_click(&mut self, callback: ClickCallback) -> ListenerId;

    /// Quitar un listener de click (ids desconocidos se ignoran)
    fn off_click(&mut self, listener: ListenerId);

    /// Agregar un source con nombre
    fn add_source(&mut self, id: &str, source: &Value) -> Result<(), MapError>;

    /// Agregar un layer con nombre que referencia un source
    fn add_layer(&mut self, layer: &Value) -> Result<(), MapError>;

    /// Agregar el control de navegación (zoom / brújula)
    fn add_navigation_control(&mut self, position: ControlPosition) -> Result<(), MapError>;

    /// Destruir la instancia; el widget no se vuelve a usar
    fn remove(&mut self);

    /// Dibujar un marcador como source GeoJSON + layer `circle`
    fn draw_marker(&mut self, marker: &MarkerRecord, style: &MarkerConfig) -> Result<(), MapError> {
        let id = marker.layer_id();
        self.add_source(&id, &marker.to_geojson_source())?;
        self.add_layer(&circle_layer(&id, style))
    }
}

/// Crea widgets ligados a un contenedor
pub trait MapFactory {
    type Container;
    type Widget: MapWidget + 'static;

    fn create(&self, container: &Self::Container, options: &MapOptions) -> Result<Self::Widget, MapError>;
}

/// Layer `circle` que pinta el source del mismo nombre
pub fn circle_layer(id: &str, style: &MarkerConfig) -> Value {
    serde_json::json!({
        "id": id,
        "type": "circle",
        "source": id,
        "paint": {
            "circle-radius": style.radius,
            "circle-color": style.color,
            "circle-stroke-width": 2,
            "circle-stroke-color": "#ffffff",
        },
    })
}

/// Opciones del constructor del mapa (sin el contenedor)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub style: String,
    pub center: [f64; 2],
    pub zoom: f64,
    pub access_token: String,
}

impl MapOptions {
    pub fn new(style: &str, center: LngLat, zoom: f64, access_token: &str) -> Self {
        Self {
            style: style.to_string(),
            center: center.to_array(),
            zoom,
            access_token: access_token.to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.map_config.style,
            config.map_config.center(),
            config.map_config.default_zoom,
            config.mapbox_token(),
        )
    }
}

/// Esquina donde se ancla un control
///
/// Solo la esquina superior derecha: la izquierda es del panel de marcadores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPosition {
    TopRight,
}

impl ControlPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlPosition::TopRight => "top-right",
        }
    }
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NoDocument,
    ContainerNotFound(String),
    Construction(String),
    Widget(String),
    NotReady,
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NoDocument => write!(f, "No document available"),
            MapError::ContainerNotFound(id) => write!(f, "Map container #{} not found", id),
            MapError::Construction(msg) => write!(f, "Map construction failed: {}", msg),
            MapError::Widget(msg) => write!(f, "Map widget error: {}", msg),
            MapError::NotReady => write!(f, "Map is not ready"),
        }
    }
}

impl std::error::Error for MapError {}

impl From<MapError> for wasm_bindgen::JsValue {
    fn from(err: MapError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_serialize_like_mapbox_expects() {
        let options = MapOptions::new("mapbox://styles/mapbox/streets-v11", LngLat::new(46.6753, 24.7136), 9.0, "pk.abc");
        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["accessToken"], "pk.abc");
        assert_eq!(value["center"], serde_json::json!([46.6753, 24.7136]));
        assert_eq!(value["zoom"], 9.0);
    }

    #[test]
    fn test_circle_layer_references_its_source() {
        let layer = circle_layer("marker-7", &MarkerConfig::default());
        assert_eq!(layer["id"], "marker-7");
        assert_eq!(layer["source"], "marker-7");
        assert_eq!(layer["type"], "circle");
        assert_eq!(layer["paint"]["circle-color"], "#e55e5e");
    }

    #[test]
    fn test_page_errors_name_what_is_missing() {
        assert_eq!(MapError::NoDocument.to_string(), "No document available");
        assert_eq!(
            MapError::ContainerNotFound(crate::utils::constants::APP_ROOT_ID.to_string()).to_string(),
            "Map container #app not found"
        );
        assert_eq!(ControlPosition::TopRight.as_str(), "top-right");
    }
}
