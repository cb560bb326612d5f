// ============================================================================
// MARKER VIEWMODEL - Click en el mapa -> marcador en el registro + en el mapa
// ============================================================================

use std::cell::Cell;
use crate::config::MarkerConfig;
use crate::maps::{ListenerId, MapWidget};
use crate::models::{LngLat, MarkerRecord};
use crate::state::{MarkerLedger, ReadyHook, WeakMapController};

/// Se engancha al mapa listo y registra un marcador por click
pub struct MarkerViewModel<W: MapWidget> {
    ledger: MarkerLedger,
    controller: WeakMapController<W>,
    style: MarkerConfig,
    listener: Cell<Option<ListenerId>>,
}

impl<W: MapWidget + 'static> MarkerViewModel<W> {
    pub fn new(controller: WeakMapController<W>, style: MarkerConfig) -> Self {
        Self {
            ledger: MarkerLedger::new(),
            controller,
            style,
            listener: Cell::new(None),
        }
    }

    pub fn ledger(&self) -> &MarkerLedger {
        &self.ledger
    }

    pub fn is_subscribed(&self) -> bool {
        self.listener.get().is_some()
    }

    /// Click sobre el mapa listo: registrar y pedir el dibujo
    fn handle_click(
        ledger: &MarkerLedger,
        controller: &WeakMapController<W>,
        style: &MarkerConfig,
        at: LngLat,
    ) -> Option<MarkerRecord> {
        let controller = controller.upgrade()?;
        if !controller.is_ready() {
            log::warn!("⚠️ [MARKERS] Click ignorado: el mapa no está listo");
            return None;
        }

        let record = ledger.record_click(at);
        match controller.with_ready_widget(|widget| widget.draw_marker(&record, style)) {
            Ok(Ok(())) => {}
            Ok(Err(e)) | Err(e) => {
                log::warn!("⚠️ [MARKERS] Marcador {} registrado pero no dibujado: {}", record.id, e);
            }
        }
        Some(record)
    }
}

impl<W: MapWidget + 'static> ReadyHook<W> for MarkerViewModel<W> {
    fn on_ready(&self, widget: &mut W) {
        // Nunca dos handlers a la vez
        if let Some(previous) = self.listener.take() {
            widget.off_click(previous);
        }

        let ledger = self.ledger.clone();
        let controller = self.controller.clone();
        let style = self.style.clone();
        let listener = widget.on_click(Box::new(move |at| {
            Self::handle_click(&ledger, &controller, &style, at);
        }));

        log::info!("🔗 [MARKERS] Listener de click registrado ({})", listener);
        self.listener.set(Some(listener));
    }

    fn on_teardown(&self, widget: &mut W) {
        if let Some(listener) = self.listener.take() {
            widget.off_click(listener);
            log::info!("🔌 [MARKERS] Listener de click removido ({})", listener);
        }
    }
}
