// ============================================================================
// BASIC PAGE - Título + contenedor del mapa
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{as_html_element, ElementBuilder};
use crate::utils::constants::{BASIC_MAP_HEIGHT, BASIC_PAGE_TITLE, MAP_CONTAINER_ID};
use super::MapPage;

/// Renderizar la página sin marcadores
pub fn render_basic_page() -> Result<MapPage, JsValue> {
    let title = ElementBuilder::new("h1")?
        .text(BASIC_PAGE_TITLE)
        .build();

    let map_container = ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .style(&[("width", "100%"), ("height", BASIC_MAP_HEIGHT)])?
        .build();

    let root = ElementBuilder::new("div")?
        .class("page page--basic")
        .child(title)?
        .child(map_container.clone())?
        .build();

    Ok(MapPage {
        root,
        map_container: as_html_element(&map_container)?,
        marker_panel: None,
    })
}
