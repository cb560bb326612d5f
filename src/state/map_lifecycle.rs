// ============================================================================
// MAP LIFECYCLE - Dueño exclusivo de la instancia del widget de mapa
// ============================================================================
// Unmounted -> (mount con contenedor) -> Constructing -> (ready) -> Ready
// Constructing | Ready -> (unmount) -> Unmounted
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use crate::maps::{ControlPosition, MapError, MapFactory, MapOptions, MapWidget};

/// Fase del ciclo de vida del mapa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPhase {
    Unmounted,
    Constructing,
    Ready,
}

/// Lógica hermana que depende del mapa listo
///
/// `on_ready` corre una vez por montaje, justo después de que el mapa
/// queda en `Ready`. `on_teardown` corre antes de destruir el widget,
/// solo si `on_ready` ya corrió.
pub trait ReadyHook<W> {
    fn on_ready(&self, widget: &mut W);
    fn on_teardown(&self, widget: &mut W);
}

struct ControllerInner<W: MapWidget> {
    phase: MapPhase,
    widget: Option<W>,
    hooks: Vec<Rc<dyn ReadyHook<W>>>,
}

impl<W: MapWidget> ControllerInner<W> {
    /// Desenganchar hooks y destruir el widget (si existe)
    fn teardown(&mut self) -> bool {
        let Some(mut widget) = self.widget.take() else {
            self.phase = MapPhase::Unmounted;
            self.hooks.clear();
            return false;
        };

        if self.phase == MapPhase::Ready {
            for hook in self.hooks.iter() {
                hook.on_teardown(&mut widget);
            }
        }
        widget.remove();
        self.phase = MapPhase::Unmounted;
        self.hooks.clear();
        true
    }
}

impl<W: MapWidget> Drop for ControllerInner<W> {
    fn drop(&mut self) {
        if self.teardown() {
            log::warn!("⚠️ [MAP] Controlador descartado sin desmontar, widget destruido");
        }
    }
}

/// Controlador del ciclo de vida del mapa (handle barato de clonar)
pub struct MapController<W: MapWidget> {
    inner: Rc<RefCell<ControllerInner<W>>>,
}

impl<W: MapWidget> Clone for MapController<W> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

/// Referencia débil al controlador, para callbacks que viven en el widget
pub struct WeakMapController<W: MapWidget> {
    inner: Weak<RefCell<ControllerInner<W>>>,
}

impl<W: MapWidget> Clone for WeakMapController<W> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<W: MapWidget> WeakMapController<W> {
    pub fn upgrade(&self) -> Option<MapController<W>> {
        self.inner.upgrade().map(|inner| MapController { inner })
    }
}

impl<W: MapWidget + 'static> MapController<W> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                phase: MapPhase::Unmounted,
                widget: None,
                hooks: Vec::new(),
            })),
        }
    }

    pub fn downgrade(&self) -> WeakMapController<W> {
        WeakMapController { inner: Rc::downgrade(&self.inner) }
    }

    pub fn phase(&self) -> MapPhase {
        self.inner.borrow().phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == MapPhase::Ready
    }

    /// Crear el widget dentro del contenedor
    ///
    /// Devuelve `Ok(false)` sin crear nada si no hay contenedor o si ya hay
    /// un mapa montado. Los errores del constructor se propagan tal cual.
    pub fn mount<F>(
        &self,
        factory: &F,
        container: Option<&F::Container>,
        options: &MapOptions,
        hooks: Vec<Rc<dyn ReadyHook<W>>>,
    ) -> Result<bool, MapError>
    where
        F: MapFactory<Widget = W>,
    {
        let Some(container) = container else {
            log::warn!("⚠️ [MAP] Sin contenedor, el mapa no se monta");
            return Ok(false);
        };

        if self.phase() != MapPhase::Unmounted {
            log::warn!("⚠️ [MAP] Ya hay un mapa montado ({:?})", self.phase());
            return Ok(false);
        }

        log::info!("🗺️ [MAP] Creando mapa (style: {}, zoom: {})", options.style, options.zoom);
        let mut widget = factory.create(container, options)?;

        let controller = self.downgrade();
        widget.on_ready(Box::new(move || {
            if let Some(controller) = controller.upgrade() {
                controller.handle_ready();
            }
        }));

        let mut inner = self.inner.borrow_mut();
        inner.widget = Some(widget);
        inner.hooks = hooks;
        inner.phase = MapPhase::Constructing;
        Ok(true)
    }

    /// Evento "load" del widget: control de navegación + publicar a los hooks
    fn handle_ready(&self) {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;

        if inner.phase != MapPhase::Constructing {
            log::warn!("⚠️ [MAP] Evento ready ignorado en fase {:?}", inner.phase);
            return;
        }
        let Some(widget) = inner.widget.as_mut() else {
            return;
        };

        if let Err(e) = widget.add_navigation_control(ControlPosition::TopRight) {
            log::warn!("⚠️ [MAP] No se pudo agregar el control de navegación: {}", e);
        }
        inner.phase = MapPhase::Ready;
        log::info!("✅ [MAP] Mapa listo");

        for hook in inner.hooks.iter() {
            hook.on_ready(widget);
        }
    }

    /// Acceso al widget solo en fase `Ready`
    pub fn with_ready_widget<R>(&self, f: impl FnOnce(&mut W) -> R) -> Result<R, MapError> {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != MapPhase::Ready {
            return Err(MapError::NotReady);
        }
        let widget = inner.widget.as_mut().ok_or(MapError::NotReady)?;
        Ok(f(widget))
    }

    /// Destruir el widget (en cualquier fase). Devuelve si había uno.
    pub fn unmount(&self) -> bool {
        let removed = self.inner.borrow_mut().teardown();
        if removed {
            log::info!("🧹 [MAP] Mapa destruido");
        }
        removed
    }
}

impl<W: MapWidget + 'static> Default for MapController<W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use crate::maps::fake::{FakeMap, FakeMapFactory};
    use crate::models::LngLat;

    fn options() -> MapOptions {
        MapOptions::new("mapbox://styles/mapbox/streets-v11", LngLat::new(46.6753, 24.7136), 9.0, "pk.test")
    }

    #[derive(Default)]
    struct CountingHook {
        ready: Cell<usize>,
        teardown: Cell<usize>,
    }

    impl ReadyHook<FakeMap> for CountingHook {
        fn on_ready(&self, _widget: &mut FakeMap) {
            self.ready.set(self.ready.get() + 1);
        }

        fn on_teardown(&self, _widget: &mut FakeMap) {
            self.teardown.set(self.teardown.get() + 1);
        }
    }

    fn hooks(hook: &Rc<CountingHook>) -> Vec<Rc<dyn ReadyHook<FakeMap>>> {
        let hook: Rc<dyn ReadyHook<FakeMap>> = hook.clone();
        vec![hook]
    }

    #[test]
    fn test_mount_without_container_stays_unmounted() {
        let factory = FakeMapFactory::new();
        let controller = MapController::new();

        let mounted = controller.mount(&factory, None, &options(), Vec::new()).unwrap();

        assert!(!mounted);
        assert_eq!(controller.phase(), MapPhase::Unmounted);
        assert_eq!(factory.created(), 0);
    }

    #[test]
    fn test_full_lifecycle() {
        let factory = FakeMapFactory::new();
        let controller = MapController::new();
        let hook = Rc::new(CountingHook::default());

        assert!(controller.mount(&factory, Some(&"map".to_string()), &options(), hooks(&hook)).unwrap());
        assert_eq!(controller.phase(), MapPhase::Constructing);
        assert_eq!(factory.created(), 1);
        assert_eq!(factory.last_options(), Some(options()));
        assert!(factory.controls().is_empty());

        factory.fire_ready();
        assert_eq!(controller.phase(), MapPhase::Ready);
        assert_eq!(factory.controls(), vec![ControlPosition::TopRight]);
        assert_eq!(hook.ready.get(), 1);

        assert!(controller.unmount());
        assert_eq!(controller.phase(), MapPhase::Unmounted);
        assert_eq!(hook.teardown.get(), 1);
        assert_eq!(factory.removed(), 1);
    }

    #[test]
    fn test_second_mount_does_not_create_another_widget() {
        let factory = FakeMapFactory::new();
        let controller = MapController::new();
        let container = "map".to_string();

        assert!(controller.mount(&factory, Some(&container), &options(), Vec::new()).unwrap());
        assert!(!controller.mount(&factory, Some(&container), &options(), Vec::new()).unwrap());
        assert_eq!(factory.created(), 1);
    }

    #[test]
    fn test_unmount_before_ready_still_destroys_once() {
        let factory = FakeMapFactory::new();
        let controller = MapController::new();
        let hook = Rc::new(CountingHook::default());

        controller.mount(&factory, Some(&"map".to_string()), &options(), hooks(&hook)).unwrap();
        assert!(controller.unmount());
        assert!(!controller.unmount());

        // Un "load" tardío no revive el mapa
        factory.fire_ready();
        assert_eq!(controller.phase(), MapPhase::Unmounted);
        assert_eq!(hook.ready.get(), 0);
        assert_eq!(hook.teardown.get(), 0);
        assert_eq!(factory.removed(), 1);
        assert!(factory.controls().is_empty());
    }

    #[test]
    fn test_construction_error_is_propagated() {
        let factory = FakeMapFactory::new();
        factory.fail_next_create("invalid access token");
        let controller = MapController::new();

        let err = controller.mount(&factory, Some(&"map".to_string()), &options(), Vec::new()).unwrap_err();

        assert_eq!(err, MapError::Construction("invalid access token".to_string()));
        assert_eq!(controller.phase(), MapPhase::Unmounted);
        assert_eq!(factory.removed(), 0);
    }

    #[test]
    fn test_ready_widget_access_requires_ready_phase() {
        let factory = FakeMapFactory::new();
        let controller: MapController<FakeMap> = MapController::new();
        assert_eq!(controller.with_ready_widget(|_| ()), Err(MapError::NotReady));

        controller.mount(&factory, Some(&"map".to_string()), &options(), Vec::new()).unwrap();
        assert_eq!(controller.with_ready_widget(|_| ()), Err(MapError::NotReady));

        factory.fire_ready();
        assert_eq!(controller.with_ready_widget(|_| 42), Ok(42));
    }

    #[test]
    fn test_dropping_controller_destroys_widget() {
        let factory = FakeMapFactory::new();
        {
            let controller = MapController::new();
            controller.mount(&factory, Some(&"map".to_string()), &options(), Vec::new()).unwrap();
            factory.fire_ready();
        }
        assert_eq!(factory.removed(), 1);
    }
}
