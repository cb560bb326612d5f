// ============================================================================
// MARKER PAGE - Mapa a pantalla completa + panel de marcadores
// ============================================================================

use wasm_bindgen::prelude::*;
use crate::dom::{as_html_element, ElementBuilder};
use crate::utils::constants::MAP_CONTAINER_ID;
use super::{render_marker_panel, MapPage};

/// Renderizar la página con registro de marcadores
pub fn render_marker_page() -> Result<MapPage, JsValue> {
    let map_container = ElementBuilder::new("div")?
        .id(MAP_CONTAINER_ID)?
        .class("map-container")
        .style(&[
            ("position", "absolute"),
            ("top", "0"),
            ("bottom", "0"),
            ("width", "100%"),
        ])?
        .build();

    let panel = render_marker_panel()?;

    let root = ElementBuilder::new("div")?
        .class("page page--markers")
        .child(map_container.clone())?
        .child(panel.clone())?
        .build();

    Ok(MapPage {
        root,
        map_container: as_html_element(&map_container)?,
        marker_panel: Some(panel),
    })
}
