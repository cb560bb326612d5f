use serde::{Deserialize, Serialize};
use crate::models::LngLat;
use crate::utils::constants::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub view: ViewVariant,
    pub map_config: MapConfig,
    pub marker_config: MarkerConfig,
    pub mapbox_access_token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            view: ViewVariant::Markers,
            map_config: MapConfig::default(),
            marker_config: MarkerConfig::default(),
            mapbox_access_token: String::new(),
        }
    }
}

/// Qué versión de la página se monta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewVariant {
    /// Solo el mapa
    Basic,
    /// Mapa + registro de marcadores por click
    Markers,
}

impl ViewVariant {
    /// Valores desconocidos caen en `Markers`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "basic" => ViewVariant::Basic,
            _ => ViewVariant::Markers,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub style: String,
    pub default_center_lng: f64,
    pub default_center_lat: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style: DEFAULT_MAP_STYLE.to_string(),
            default_center_lng: DEFAULT_CENTER_LNG,
            default_center_lat: DEFAULT_CENTER_LAT,
            default_zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapConfig {
    pub fn center(&self) -> LngLat {
        LngLat::new(self.default_center_lng, self.default_center_lat)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    pub radius: f64,
    pub color: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_MARKER_RADIUS,
            color: DEFAULT_MARKER_COLOR.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let token = option_env!("MAPBOX_PUBLIC_TOKEN")
            .or(option_env!("MAPBOX_ACCESS_TOKEN"));

        Self::from_values(EnvValues {
            environment: option_env!("ENVIRONMENT"),
            enable_logging: option_env!("ENABLE_LOGGING"),
            view: option_env!("MAP_VIEW"),
            style: option_env!("MAP_STYLE"),
            center_lng: option_env!("DEFAULT_MAP_CENTER_LNG"),
            center_lat: option_env!("DEFAULT_MAP_CENTER_LAT"),
            zoom: option_env!("DEFAULT_MAP_ZOOM"),
            marker_radius: option_env!("MARKER_RADIUS"),
            marker_color: option_env!("MARKER_COLOR"),
            token,
        })
    }

    fn from_values(env: EnvValues<'_>) -> Self {
        let defaults = Self::default();
        Self {
            environment: env.environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: parse_or(env.enable_logging, defaults.enable_logging),
            view: env.view.map(ViewVariant::parse).unwrap_or(defaults.view),
            map_config: MapConfig {
                style: env.style
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or(DEFAULT_MAP_STYLE).to_string(),
                default_center_lng: parse_or(env.center_lng, DEFAULT_CENTER_LNG),
                default_center_lat: parse_or(env.center_lat, DEFAULT_CENTER_LAT),
                default_zoom: parse_or(env.zoom, DEFAULT_ZOOM),
            },
            marker_config: MarkerConfig {
                radius: parse_or(env.marker_radius, DEFAULT_MARKER_RADIUS),
                color: env.marker_color
                    .unwrap_or(DEFAULT_MARKER_COLOR).to_string(),
            },
            mapbox_access_token: env.token.unwrap_or("").to_string(),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Obtiene el token de Mapbox (puede estar vacío, no se valida aquí)
    pub fn mapbox_token(&self) -> &str {
        &self.mapbox_access_token
    }
}

/// Valores crudos leídos con `option_env!`
#[derive(Default)]
struct EnvValues<'a> {
    environment: Option<&'a str>,
    enable_logging: Option<&'a str>,
    view: Option<&'a str>,
    style: Option<&'a str>,
    center_lng: Option<&'a str>,
    center_lat: Option<&'a str>,
    zoom: Option<&'a str>,
    marker_radius: Option<&'a str>,
    marker_color: Option<&'a str>,
    token: Option<&'a str>,
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
