//! Domain events and the in-process channel between bounded contexts.
//!
//! Contexts communicate exclusively through immutable, timestamped events: a
//! command handler mutates and persists its own aggregates, then publishes;
//! zero or more handlers in other contexts react. Delivery is synchronous,
//! in-process and at-least-once, so consumers must be idempotent.

pub mod bus;
pub mod event;
pub mod in_memory_bus;
pub mod publisher;

pub use bus::{EventBus, EventHandler};
pub use event::Event;
pub use in_memory_bus::InMemoryEventBus;
pub use publisher::EventPublisher;
