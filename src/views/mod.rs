pub mod basic_page;
pub mod marker_page;
pub mod marker_panel;

pub use basic_page::render_basic_page;
pub use marker_page::render_marker_page;
pub use marker_panel::{bind_marker_panel, render_marker_panel, update_marker_panel};

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};
use crate::config::ViewVariant;

/// Elementos de una página renderizada
pub struct MapPage {
    pub root: Element,
    pub map_container: HtmlElement,
    pub marker_panel: Option<Element>,
}

/// Renderizar la página según la variante
pub fn render_map_page(variant: ViewVariant) -> Result<MapPage, JsValue> {
    match variant {
        ViewVariant::Basic => render_basic_page(),
        ViewVariant::Markers => render_marker_page(),
    }
}
