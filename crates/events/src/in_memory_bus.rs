//! In-memory event bus: synchronous, single-process dispatch.

use std::sync::{Arc, RwLock};

use crate::bus::{EventBus, EventHandler};
use crate::event::Event;

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Delivery happens inside `publish`, on the caller's thread
/// - At-least-once acceptable (subscribers must be idempotent)
///
/// Handler errors are logged and swallowed: the publishing command has already
/// persisted its state change, so a failing subscriber must not unwind it.
pub struct InMemoryEventBus<M> {
    handlers: RwLock<Vec<Arc<dyn EventHandler<M>>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }
}

impl<M> core::fmt::Debug for InMemoryEventBus<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let count = self.handlers.read().map(|h| h.len()).unwrap_or(0);
        f.debug_struct("InMemoryEventBus")
            .field("handlers", &count)
            .finish()
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Event,
{
    fn publish(&self, event: M) {
        let handlers = match self.handlers.read() {
            Ok(handlers) => handlers,
            Err(_) => {
                tracing::error!(event_type = event.event_type(), "event bus lock poisoned");
                return;
            }
        };

        for handler in handlers.iter() {
            if let Err(error) = handler.handle(&event) {
                tracing::error!(
                    event_type = event.event_type(),
                    %error,
                    "event handler failed",
                );
            }
        }
    }

    fn subscribe(&self, handler: Arc<dyn EventHandler<M>>) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.push(handler);
        }
    }
}
