// ============================================================================
// MARKER LEDGER - Registro ordenado de marcadores colocados por click
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::models::{LngLat, MarkerId, MarkerRecord};
use crate::state::ReactiveState;

/// Registro append-only de marcadores de una sesión de la vista
///
/// Se crea al montar la vista y se descarta al desmontar: un remount
/// empieza de nuevo en el id 1.
#[derive(Clone)]
pub struct MarkerLedger {
    records: ReactiveState<Vec<MarkerRecord>>,
    next_id: Rc<Cell<MarkerId>>,
}

impl MarkerLedger {
    pub fn new() -> Self {
        Self {
            records: ReactiveState::new(Vec::new()),
            next_id: Rc::new(Cell::new(1)),
        }
    }

    /// Registrar un click: asigna el siguiente id y agrega el marcador
    pub fn record_click(&self, at: LngLat) -> MarkerRecord {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let record = MarkerRecord::new(id, at);
        log::info!("📍 [MARKERS] Marcador {} en ({:.5}, {:.5})", id, at.lng, at.lat);
        self.records.update(|records| records.push(record));
        record
    }

    /// Copia ordenada de los marcadores
    pub fn records(&self) -> Vec<MarkerRecord> {
        self.records.get()
    }

    pub fn len(&self) -> usize {
        self.records.with(|records| records.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Líneas de texto para el panel (una por marcador)
    pub fn display_lines(&self) -> Vec<String> {
        self.records.with(|records| records.iter().map(MarkerRecord::display_line).collect())
    }

    /// Suscribirse a nuevos marcadores
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.records.subscribe(callback);
    }

    /// Soltar los subscribers (rompe el ciclo subscriber -> ledger al desmontar)
    pub fn unsubscribe_all(&self) {
        self.records.clear_subscribers();
    }
}

impl Default for MarkerLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let ledger = MarkerLedger::new();
        let ids: Vec<MarkerId> = (0..5)
            .map(|i| ledger.record_click(LngLat::new(i as f64, 0.0)).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let ledger = MarkerLedger::new();
        let spot = LngLat::new(46.7, 24.7);
        ledger.record_click(spot);
        ledger.record_click(spot);

        let records = ledger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].position(), records[1].position());
        assert_ne!(records[0].id, records[1].id);
    }

    #[test]
    fn test_subscribers_see_new_lines_through_clones() {
        let ledger = MarkerLedger::new();
        let lines = Rc::new(std::cell::RefCell::new(Vec::new()));
        {
            let lines = lines.clone();
            let reader = ledger.clone();
            ledger.subscribe(move || *lines.borrow_mut() = reader.display_lines());
        }

        let handle = ledger.clone();
        handle.record_click(LngLat::new(46.70, 24.70));

        assert_eq!(ledger.len(), 1);
        assert_eq!(*lines.borrow(), vec!["ID: 1, Lng: 46.70000, Lat: 24.70000".to_string()]);
    }

    #[test]
    fn test_new_ledger_starts_empty() {
        let first = MarkerLedger::new();
        first.record_click(LngLat::new(1.0, 1.0));

        let second = MarkerLedger::new();
        assert!(second.is_empty());
        assert_eq!(second.record_click(LngLat::new(2.0, 2.0)).id, 1);
    }
}
