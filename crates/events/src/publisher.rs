//! Publishing port for the domain layer.
//!
//! The domain defines *what* it wants to publish (this trait); infrastructure
//! decides *how* (in-memory bus here, a broker elsewhere). Application services
//! stay generic over the publisher so a context never sees who is listening.

use std::sync::Arc;

use crate::event::Event;

/// Port: publish domain events after a state change has been persisted.
///
/// Publishing is fire-and-forget from the publisher's point of view: subscriber
/// failures must not roll back the command that produced the event. The bus
/// implementation is responsible for surfacing handler errors (e.g. logging).
pub trait EventPublisher<E: Event>: Send + Sync {
    fn publish(&self, event: E);

    /// Publish several events in order.
    fn publish_all(&self, events: Vec<E>) {
        for event in events {
            self.publish(event);
        }
    }
}

impl<E, P> EventPublisher<E> for Arc<P>
where
    E: Event,
    P: EventPublisher<E> + ?Sized,
{
    fn publish(&self, event: E) {
        (**self).publish(event)
    }
}
