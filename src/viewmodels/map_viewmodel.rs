// ============================================================================
// MAP VIEWMODEL - Estado de una instancia de la vista (mapa + marcadores)
// ============================================================================
// Todo el estado vive aquí, nada en globales: se crea al montar y se
// descarta al desmontar. Varias vistas pueden convivir.
// ============================================================================

use std::rc::Rc;
use crate::config::{AppConfig, MarkerConfig, ViewVariant};
use crate::maps::{MapError, MapFactory, MapOptions};
use crate::state::{MapController, MapPhase, MarkerLedger, ReadyHook};
use super::MarkerViewModel;

/// ViewModel de la página del mapa
pub struct MapViewModel<F: MapFactory> {
    factory: F,
    options: MapOptions,
    marker_style: MarkerConfig,
    variant: ViewVariant,
    controller: MapController<F::Widget>,
    markers: Option<Rc<MarkerViewModel<F::Widget>>>,
}

impl<F: MapFactory> MapViewModel<F> {
    pub fn new(factory: F, options: MapOptions, marker_style: MarkerConfig, variant: ViewVariant) -> Self {
        Self {
            factory,
            options,
            marker_style,
            variant,
            controller: MapController::new(),
            markers: None,
        }
    }

    pub fn from_config(factory: F, config: &AppConfig, variant: ViewVariant) -> Self {
        Self::new(factory, MapOptions::from_config(config), config.marker_config.clone(), variant)
    }

    pub fn variant(&self) -> ViewVariant {
        self.variant
    }

    pub fn phase(&self) -> MapPhase {
        self.controller.phase()
    }

    /// Registro de marcadores del montaje actual (solo en la variante `Markers`)
    pub fn ledger(&self) -> Option<MarkerLedger> {
        self.markers.as_ref().map(|markers| markers.ledger().clone())
    }

    /// Montar el mapa en el contenedor
    ///
    /// Cada montaje arranca con un registro vacío (ids desde 1).
    pub fn mount(&mut self, container: Option<&F::Container>) -> Result<(), MapError> {
        if self.controller.phase() != MapPhase::Unmounted {
            log::warn!("⚠️ [MAP] mount() ignorado: la vista ya está montada");
            return Ok(());
        }

        let markers = match self.variant {
            ViewVariant::Markers => Some(Rc::new(MarkerViewModel::new(
                self.controller.downgrade(),
                self.marker_style.clone(),
            ))),
            ViewVariant::Basic => None,
        };
        let hooks: Vec<Rc<dyn ReadyHook<F::Widget>>> = markers
            .iter()
            .map(|markers| markers.clone() as Rc<dyn ReadyHook<F::Widget>>)
            .collect();

        if self.controller.mount(&self.factory, container, &self.options, hooks)? {
            self.markers = markers;
        }
        Ok(())
    }

    /// Desmontar: listener fuera, widget destruido, registro descartado
    pub fn unmount(&mut self) {
        self.controller.unmount();
        if let Some(markers) = self.markers.take() {
            markers.ledger().unsubscribe_all();
        }
    }
}
