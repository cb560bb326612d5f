// ============================================================================
// CLICK MARKER MAP - Mapbox GL JS + marcadores por click (RUST PURO / WASM)
// ============================================================================
// - Models: Marcador y coordenadas
// - Maps: Trait del widget de mapa + binding a Mapbox GL JS (solo wasm)
// - State: Ciclo de vida del mapa + registro de marcadores
// - ViewModels: Handshake mapa listo -> listener de clicks
// - Views: Funciones que renderizan DOM (sin lógica)
// ============================================================================

pub mod config;
pub mod maps;
pub mod models;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_logger::Config;
    use web_sys::PageTransitionEvent;
    use crate::app::App;
    use crate::config::{ViewVariant, CONFIG};
    use crate::state::PageLifecycle;

    // Instancia de App de la página (la vista en sí guarda su propio estado)
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
        static PAGE: RefCell<PageLifecycle> = RefCell::new(PageLifecycle::new());
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
        wasm_logger::init(Config::new(level));
        log::info!("🚀 Click Marker Map - Rust + Mapbox GL JS ({})", CONFIG.environment);

        if CONFIG.mapbox_token().is_empty() {
            log::warn!("⚠️ MAPBOX_PUBLIC_TOKEN vacío: Mapbox rechazará las peticiones de tiles");
        }

        let app = App::new()?;
        APP.with(|cell| *cell.borrow_mut() = Some(app));
        mount_view_variant(CONFIG.view)?;

        // Desmontar al salir de la página y remontar si vuelve del bfcache
        crate::dom::on_window_once("pagehide", move |_e: web_sys::Event| {
            let mounted = APP.with(|cell| cell.borrow().as_ref().and_then(App::mounted_variant));
            if PAGE.with(|page| page.borrow_mut().hide(mounted)) {
                unmount_view();
            }
        })?;
        crate::dom::on_window_once("pageshow", move |e: web_sys::Event| {
            let persisted = e
                .dyn_ref::<PageTransitionEvent>()
                .map(|e| e.persisted())
                .unwrap_or(false);
            if let Some(variant) = PAGE.with(|page| page.borrow_mut().show(persisted)) {
                log::info!("🔁 [APP] Página restaurada, montando {:?} de nuevo", variant);
                if let Err(e) = mount_view_variant(variant) {
                    log::error!("❌ [APP] No se pudo remontar la vista: {:?}", e);
                }
            }
        })?;

        Ok(())
    }

    fn mount_view_variant(variant: ViewVariant) -> Result<(), JsValue> {
        APP.with(|cell| match cell.borrow_mut().as_mut() {
            Some(app) => app.mount(variant),
            None => Err(JsValue::from_str("App no está inicializada")),
        })
    }

    /// Montar la vista (`"basic"` | `"markers"`), llamable desde el router JS
    #[wasm_bindgen]
    pub fn mount_view(variant: &str) -> Result<(), JsValue> {
        mount_view_variant(ViewVariant::parse(variant))
    }

    /// Desmontar la vista actual (destruye el mapa)
    #[wasm_bindgen]
    pub fn unmount_view() {
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                if app.is_mounted() {
                    app.unmount();
                }
            }
        });
    }
}
