// ============================================================================
// MAPBOX FFI - Foreign Function Interface para Mapbox GL JS
// ============================================================================
// Solo bindings a `window.mapboxgl` (cargado por index.html) - Sin estado
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `mapboxgl.Map`
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = Map)]
    #[derive(Debug, Clone)]
    pub type MapboxMap;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    pub fn new(options: &JsValue) -> Result<MapboxMap, JsValue>;

    #[wasm_bindgen(method)]
    pub fn on(this: &MapboxMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn once(this: &MapboxMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn off(this: &MapboxMap, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, catch, js_name = addSource)]
    pub fn add_source(this: &MapboxMap, id: &str, source: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addLayer)]
    pub fn add_layer(this: &MapboxMap, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = addControl)]
    pub fn add_control(this: &MapboxMap, control: &NavigationControl, position: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    pub fn remove(this: &MapboxMap);

    /// `mapboxgl.NavigationControl` (botones de zoom + brújula)
    #[wasm_bindgen(js_namespace = mapboxgl, js_name = NavigationControl)]
    pub type NavigationControl;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "NavigationControl")]
    pub fn new() -> NavigationControl;

    /// Evento de mouse del mapa (`click`)
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter, js_name = lngLat)]
    pub fn lng_lat(this: &MapMouseEvent) -> JsLngLat;

    /// `mapboxgl.LngLat`
    pub type JsLngLat;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &JsLngLat) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &JsLngLat) -> f64;
}

/// Verificar que la librería está cargada antes de construir el mapa
pub fn is_mapbox_loaded() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str("mapboxgl")).ok())
        .map(|lib| !lib.is_undefined())
        .unwrap_or(false)
}
