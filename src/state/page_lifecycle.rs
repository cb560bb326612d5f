// ============================================================================
// PAGE LIFECYCLE - pagehide / pageshow y el back/forward cache
// ============================================================================
// Al ocultar la página se desmonta la vista (el mapa se destruye). Si el
// navegador la restaura desde el bfcache, `main` no vuelve a correr: hay que
// volver a montar la misma vista que estaba montada.
// ============================================================================

use crate::config::ViewVariant;

/// Recuerda qué vista estaba montada cuando la página se ocultó
#[derive(Debug, Default)]
pub struct PageLifecycle {
    suspended: Option<ViewVariant>,
}

impl PageLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// `pagehide`: devuelve `true` si hay una vista que desmontar
    pub fn hide(&mut self, mounted: Option<ViewVariant>) -> bool {
        self.suspended = mounted;
        mounted.is_some()
    }

    /// `pageshow`: vista a montar de nuevo (solo al volver del bfcache)
    pub fn show(&mut self, persisted: bool) -> Option<ViewVariant> {
        let suspended = self.suspended.take();
        if persisted {
            suspended
        } else {
            None
        }
    }
}
