// ============================================================================
// APP - Monta/desmonta la vista del mapa dentro de #app
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::{ViewVariant, CONFIG};
use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::maps::web::WebMapFactory;
use crate::maps::MapError;
use crate::utils::constants::APP_ROOT_ID;
use crate::viewmodels::MapViewModel;
use crate::views::{bind_marker_panel, render_map_page};

/// Aplicación principal: una vista montada como máximo
pub struct App {
    root: Element,
    view: Option<MapViewModel<WebMapFactory>>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| MapError::ContainerNotFound(APP_ROOT_ID.to_string()))?;

        Ok(Self { root, view: None })
    }

    pub fn is_mounted(&self) -> bool {
        self.view.is_some()
    }

    /// Variante montada ahora mismo, si hay alguna
    pub fn mounted_variant(&self) -> Option<ViewVariant> {
        self.view.as_ref().map(|view| view.variant())
    }

    /// Renderizar la página y crear el mapa en su contenedor
    pub fn mount(&mut self, variant: ViewVariant) -> Result<(), JsValue> {
        if self.view.is_some() {
            self.unmount();
        }
        log::info!("🎬 [APP] Montando vista {:?}", variant);

        let page = render_map_page(variant)?;
        append_child(&self.root, &page.root)?;

        let mut view = MapViewModel::from_config(WebMapFactory, &CONFIG, variant);
        if let Err(e) = view.mount(Some(&page.map_container)) {
            log::error!("❌ [APP] No se pudo crear el mapa: {}", e);
            clear_children(&self.root);
            return Err(e.into());
        }

        if let (Some(panel), Some(ledger)) = (page.marker_panel.as_ref(), view.ledger()) {
            bind_marker_panel(panel, &ledger)?;
        }

        self.view = Some(view);
        Ok(())
    }

    /// Destruir el mapa y limpiar el DOM
    pub fn unmount(&mut self) {
        if let Some(mut view) = self.view.take() {
            log::info!("🧹 [APP] Desmontando vista {:?}", view.variant());
            view.unmount();
        }
        clear_children(&self.root);
    }
}
