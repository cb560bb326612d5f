// Widget en memoria para tests: registra cada llamada y permite disparar
// "load" y clicks a mano, como lo haría el loop de eventos del navegador.

use std::cell::RefCell;
use std::rc::Rc;
use serde_json::Value;
use crate::models::LngLat;
use super::{ClickCallback, ControlPosition, ListenerId, MapError, MapFactory, MapOptions, MapWidget, ReadyCallback};

#[derive(Default)]
struct FakeLog {
    created: usize,
    last_options: Option<MapOptions>,
    fail_next_create: Option<String>,
    ready: Option<ReadyCallback>,
    next_listener: ListenerId,
    listeners: Vec<(ListenerId, Rc<RefCell<ClickCallback>>)>,
    handler_calls: usize,
    sources: Vec<(String, Value)>,
    layers: Vec<Value>,
    controls: Vec<ControlPosition>,
    removed: usize,
    calls_after_remove: usize,
}

#[derive(Clone, Default)]
pub struct FakeMapFactory {
    log: Rc<RefCell<FakeLog>>,
}

impl FakeMapFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_create(&self, message: &str) {
        self.log.borrow_mut().fail_next_create = Some(message.to_string());
    }

    /// Dispara el "load" pendiente del último widget creado
    pub fn fire_ready(&self) {
        let callback = self.log.borrow_mut().ready.take();
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Simula un click; solo llega a los listeners registrados
    pub fn click(&self, lng: f64, lat: f64) {
        let listeners: Vec<_> = self.log.borrow().listeners.iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            self.log.borrow_mut().handler_calls += 1;
            let mut callback = listener.borrow_mut();
            (callback.as_mut())(LngLat::new(lng, lat));
        }
    }

    pub fn created(&self) -> usize {
        self.log.borrow().created
    }

    pub fn last_options(&self) -> Option<MapOptions> {
        self.log.borrow().last_options.clone()
    }

    pub fn listener_count(&self) -> usize {
        self.log.borrow().listeners.len()
    }

    pub fn handler_calls(&self) -> usize {
        self.log.borrow().handler_calls
    }

    pub fn source_ids(&self) -> Vec<String> {
        self.log.borrow().sources.iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn sources(&self) -> Vec<(String, Value)> {
        self.log.borrow().sources.clone()
    }

    pub fn layers(&self) -> Vec<Value> {
        self.log.borrow().layers.clone()
    }

    pub fn controls(&self) -> Vec<ControlPosition> {
        self.log.borrow().controls.clone()
    }

    pub fn removed(&self) -> usize {
        self.log.borrow().removed
    }

    pub fn calls_after_remove(&self) -> usize {
        self.log.borrow().calls_after_remove
    }
}

impl MapFactory for FakeMapFactory {
    type Container = String;
    type Widget = FakeMap;

    fn create(&self, _container: &String, options: &MapOptions) -> Result<FakeMap, MapError> {
        let mut log = self.log.borrow_mut();
        if let Some(message) = log.fail_next_create.take() {
            return Err(MapError::Construction(message));
        }
        log.created += 1;
        log.last_options = Some(options.clone());
        Ok(FakeMap {
            log: self.log.clone(),
            removed: false,
        })
    }
}

pub struct FakeMap {
    log: Rc<RefCell<FakeLog>>,
    removed: bool,
}

impl FakeMap {
    fn touch(&self) {
        if self.removed {
            self.log.borrow_mut().calls_after_remove += 1;
        }
    }
}

impl MapWidget for FakeMap {
    fn on_ready(&mut self, callback: ReadyCallback) {
        self.touch();
        self.log.borrow_mut().ready = Some(callback);
    }

    fn on_click(&mut self, callback: ClickCallback) -> ListenerId {
        self.touch();
        let mut log = self.log.borrow_mut();
        log.next_listener += 1;
        let id = log.next_listener;
        log.listeners.push((id, Rc::new(RefCell::new(callback))));
        id
    }

    fn off_click(&mut self, listener: ListenerId) {
        self.touch();
        self.log.borrow_mut().listeners.retain(|(id, _)| *id != listener);
    }

    fn add_source(&mut self, id: &str, source: &Value) -> Result<(), MapError> {
        self.touch();
        let mut log = self.log.borrow_mut();
        if log.sources.iter().any(|(existing, _)| existing == id) {
            return Err(MapError::Widget(format!("There is already a source with ID \"{}\"", id)));
        }
        log.sources.push((id.to_string(), source.clone()));
        Ok(())
    }

    fn add_layer(&mut self, layer: &Value) -> Result<(), MapError> {
        self.touch();
        self.log.borrow_mut().layers.push(layer.clone());
        Ok(())
    }

    fn add_navigation_control(&mut self, position: ControlPosition) -> Result<(), MapError> {
        self.touch();
        self.log.borrow_mut().controls.push(position);
        Ok(())
    }

    fn remove(&mut self) {
        self.touch();
        self.removed = true;
        self.log.borrow_mut().removed += 1;
    }
}
