// ============================================================================
// STATE MODULE - Ciclo de vida del mapa + registro de marcadores
// ============================================================================

pub mod reactivity;
pub mod map_lifecycle;
pub mod marker_ledger;
pub mod page_lifecycle;

pub use reactivity::*;
pub use map_lifecycle::*;
pub use marker_ledger::*;
pub use page_lifecycle::*;
