use std::collections::HashMap;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;
use crate::models::LngLat;
use crate::utils::mapbox_ffi::{self, MapMouseEvent, MapboxMap, NavigationControl};
use super::{ClickCallback, ControlPosition, ListenerId, MapError, MapFactory, MapOptions, MapWidget, ReadyCallback};

/// Serializar a objeto JS plano (no `Map`) como espera Mapbox
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, MapError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MapError::Widget(e.to_string()))
}

fn js_error(err: JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Crea mapas de Mapbox GL JS
#[derive(Debug, Clone, Copy, Default)]
pub struct WebMapFactory;

impl MapFactory for WebMapFactory {
    type Container = HtmlElement;
    type Widget = WebMap;

    fn create(&self, container: &HtmlElement, options: &MapOptions) -> Result<WebMap, MapError> {
        if !mapbox_ffi::is_mapbox_loaded() {
            return Err(MapError::Construction("mapboxgl is not loaded".to_string()));
        }

        let js_options = to_js(options)?;
        js_sys::Reflect::set(&js_options, &JsValue::from_str("container"), container)
            .map_err(|e| MapError::Construction(js_error(e)))?;

        let map = MapboxMap::new(&js_options).map_err(|e| MapError::Construction(js_error(e)))?;
        Ok(WebMap::new(map))
    }
}

/// Mapa de Mapbox GL JS con sus closures
///
/// Los closures viven aquí (no se hace `forget()`): se sueltan en `off_click`
/// y en `remove`, después de desregistrarlos en JS.
pub struct WebMap {
    map: MapboxMap,
    ready_closure: Option<Closure<dyn FnMut()>>,
    click_closures: HashMap<ListenerId, Closure<dyn FnMut(MapMouseEvent)>>,
    next_listener: ListenerId,
    removed: bool,
}

impl WebMap {
    fn new(map: MapboxMap) -> Self {
        Self {
            map,
            ready_closure: None,
            click_closures: HashMap::new(),
            next_listener: 0,
            removed: false,
        }
    }
}

impl MapWidget for WebMap {
    fn on_ready(&mut self, callback: ReadyCallback) {
        let closure: Closure<dyn FnMut()> = Closure::once(move || callback());
        self.map.once("load", closure.as_ref().unchecked_ref());
        self.ready_closure = Some(closure);
    }

    fn on_click(&mut self, callback: ClickCallback) -> ListenerId {
        let mut callback = callback;
        let closure = Closure::wrap(Box::new(move |event: MapMouseEvent| {
            let lng_lat = event.lng_lat();
            callback(LngLat::new(lng_lat.lng(), lng_lat.lat()));
        }) as Box<dyn FnMut(MapMouseEvent)>);

        self.map.on("click", closure.as_ref().unchecked_ref());
        self.next_listener += 1;
        self.click_closures.insert(self.next_listener, closure);
        self.next_listener
    }

    fn off_click(&mut self, listener: ListenerId) {
        if let Some(closure) = self.click_closures.remove(&listener) {
            self.map.off("click", closure.as_ref().unchecked_ref());
        }
    }

    fn add_source(&mut self, id: &str, source: &Value) -> Result<(), MapError> {
        let source = to_js(source)?;
        self.map.add_source(id, &source).map_err(|e| MapError::Widget(js_error(e)))
    }

    fn add_layer(&mut self, layer: &Value) -> Result<(), MapError> {
        let layer = to_js(layer)?;
        self.map.add_layer(&layer).map_err(|e| MapError::Widget(js_error(e)))
    }

    fn add_navigation_control(&mut self, position: ControlPosition) -> Result<(), MapError> {
        self.map
            .add_control(&NavigationControl::new(), position.as_str())
            .map_err(|e| MapError::Widget(js_error(e)))
    }

    fn remove(&mut self) {
        if self.removed {
            return;
        }
        let listeners: Vec<ListenerId> = self.click_closures.keys().copied().collect();
        for listener in listeners {
            self.off_click(listener);
        }
        self.map.remove();
        self.ready_closure = None;
        self.removed = true;
    }
}
