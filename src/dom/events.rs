// ============================================================================
// EVENT HANDLING - Listeners globales (window)
// ============================================================================
// Los listeners globales solo deben registrarse UNA VEZ: se usa un flag por
// evento para que llamadas repetidas no los acumulen. El closure se hace
// `forget()` porque vive lo mismo que la página.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;
use crate::dom::window;

thread_local! {
    static REGISTERED: RefCell<HashSet<String>> = RefCell::new(HashSet::new());
}

/// Registrar un listener en `window` una sola vez por tipo de evento
///
/// Devuelve `Ok(false)` si ya estaba registrado.
pub fn on_window_once<F>(event_type: &str, handler: F) -> Result<bool, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let already = REGISTERED.with(|registered| !registered.borrow_mut().insert(event_type.to_string()));
    if already {
        return Ok(false);
    }

    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    win.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(true)
}
