// ============================================================================
// MARKER PANEL - Lista de marcadores (texto plano) sobre el mapa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, clear_children, ElementBuilder};
use crate::state::MarkerLedger;
use crate::utils::constants::MARKER_PANEL_ID;

/// Panel fijo arriba a la izquierda, fondo semitransparente
pub fn render_marker_panel() -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("div")?
        .id(MARKER_PANEL_ID)?
        .class("marker-panel")
        .style(&[
            ("position", "fixed"),
            ("top", "10px"),
            ("left", "10px"),
            ("z-index", "1"),
            ("padding", "8px 12px"),
            ("max-height", "50vh"),
            ("overflow-y", "auto"),
            ("font-family", "monospace"),
            ("background", "rgba(255, 255, 255, 0.8)"),
        ])?
        .build();

    update_marker_panel(&panel, &[])?;
    Ok(panel)
}

/// Reemplazar el contenido del panel con una línea por marcador
pub fn update_marker_panel(panel: &Element, lines: &[String]) -> Result<(), JsValue> {
    clear_children(panel);

    let title = ElementBuilder::new("strong")?
        .text(&format!("Markers ({})", lines.len()))
        .build();
    append_child(panel, &title)?;

    for line in lines {
        let row = ElementBuilder::new("div")?
            .class("marker-panel__row")
            .text(line)
            .build();
        append_child(panel, &row)?;
    }
    Ok(())
}

/// Re-renderizar el panel cada vez que el registro cambia
pub fn bind_marker_panel(panel: &Element, ledger: &MarkerLedger) -> Result<(), JsValue> {
    update_marker_panel(panel, &ledger.display_lines())?;

    let panel = panel.clone();
    let reader = ledger.clone();
    ledger.subscribe(move || {
        if let Err(e) = update_marker_panel(&panel, &reader.display_lines()) {
            log::error!("❌ [MARKERS] Error actualizando el panel: {:?}", e);
        }
    });
    Ok(())
}
