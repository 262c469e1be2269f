//! Integration-event wiring between the two contexts.
//!
//! Each context publishes its *own* event type and stays ignorant of the other
//! side. The shared bus carries one envelope type; the adapters here lift a
//! context's events into it. Dependency direction stays one-way: catalog and
//! lending depend on `biblios-events`, never on each other.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use biblios_catalog::CatalogEvent;
use biblios_events::{Event, EventBus, EventPublisher, InMemoryEventBus};
use biblios_lending::LendingEvent;

/// Envelope carried on the shared in-process bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegrationEvent {
    Catalog(CatalogEvent),
    Lending(LendingEvent),
}

impl Event for IntegrationEvent {
    fn event_type(&self) -> &'static str {
        match self {
            IntegrationEvent::Catalog(e) => e.event_type(),
            IntegrationEvent::Lending(e) => e.event_type(),
        }
    }

    fn version(&self) -> u32 {
        match self {
            IntegrationEvent::Catalog(e) => e.version(),
            IntegrationEvent::Lending(e) => e.version(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            IntegrationEvent::Catalog(e) => e.occurred_at(),
            IntegrationEvent::Lending(e) => e.occurred_at(),
        }
    }
}

/// The bus used by the whole process.
pub type SharedEventBus = Arc<InMemoryEventBus<IntegrationEvent>>;

pub fn shared_event_bus() -> SharedEventBus {
    Arc::new(InMemoryEventBus::new())
}

/// Publisher adapter handed to the Catalog context.
#[derive(Clone)]
pub struct CatalogEventPublisher {
    bus: Arc<dyn EventBus<IntegrationEvent>>,
}

impl CatalogEventPublisher {
    pub fn new(bus: Arc<dyn EventBus<IntegrationEvent>>) -> Self {
        Self { bus }
    }
}

impl EventPublisher<CatalogEvent> for CatalogEventPublisher {
    fn publish(&self, event: CatalogEvent) {
        self.bus.publish(IntegrationEvent::Catalog(event));
    }
}

/// Publisher adapter handed to the Lending context.
#[derive(Clone)]
pub struct LendingEventPublisher {
    bus: Arc<dyn EventBus<IntegrationEvent>>,
}

impl LendingEventPublisher {
    pub fn new(bus: Arc<dyn EventBus<IntegrationEvent>>) -> Self {
        Self { bus }
    }
}

impl EventPublisher<LendingEvent> for LendingEventPublisher {
    fn publish(&self, event: LendingEvent) {
        self.bus.publish(IntegrationEvent::Lending(event));
    }
}
