// ============================================================================
// CONSTANTS - Valores por defecto y ids del DOM
// ============================================================================

/// Estilo de Mapbox por defecto
pub const DEFAULT_MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v11";

/// Centro inicial (Riyadh)
pub const DEFAULT_CENTER_LNG: f64 = 46.6753;
pub const DEFAULT_CENTER_LAT: f64 = 24.7136;
pub const DEFAULT_ZOOM: f64 = 9.0;

pub const DEFAULT_MARKER_RADIUS: f64 = 8.0;
pub const DEFAULT_MARKER_COLOR: &str = "#e55e5e";

/// Elemento raíz donde se monta la vista
pub const APP_ROOT_ID: &str = "app";
pub const MAP_CONTAINER_ID: &str = "map";
pub const MARKER_PANEL_ID: &str = "marker-panel";

pub const BASIC_PAGE_TITLE: &str = "Mapbox Example";
pub const BASIC_MAP_HEIGHT: &str = "1100px";
