//! Event publishing/subscription abstraction (mechanics only).
//!
//! This module provides the **event bus pattern** - a pub/sub mechanism for
//! distributing events to consumers in other bounded contexts (projections,
//! reaction handlers).
//!
//! ## Design Philosophy
//!
//! The bus is intentionally **lightweight** and makes minimal assumptions:
//!
//! - **Transport-agnostic**: the contract fits an in-memory dispatcher, a
//!   message queue, or a broker equally well
//! - **At-least-once delivery**: events may be delivered multiple times;
//!   consumers must be idempotent
//! - **No persistence**: the bus distributes, it does not store; each context's
//!   repository remains the source of truth for its own records
//!
//! ## Why At-Least-Once?
//!
//! At-least-once is acceptable because every consumer in this system performs
//! an idempotent upsert keyed by id ("check-before-insert"), so redelivery is a
//! no-op. Exactly-once would buy nothing and cost a delivery ledger.
//!
//! ## Error Handling
//!
//! A handler returning an error must not prevent other handlers from seeing the
//! event, and must not fail the publishing command; the state change that
//! produced the event is already persisted. Implementations log and continue.

use std::sync::Arc;

use biblios_core::DomainResult;

/// A consumer of events published on a bus.
///
/// Handlers react to events from *other* contexts: each performs its own
/// idempotent update against its own repositories. Processing the same event
/// twice must produce the same end state.
pub trait EventHandler<M>: Send + Sync {
    fn handle(&self, event: &M) -> DomainResult<()>;
}

impl<M, H> EventHandler<M> for Arc<H>
where
    H: EventHandler<M> + ?Sized,
{
    fn handle(&self, event: &M) -> DomainResult<()> {
        (**self).handle(event)
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish` delivers the event to every subscribed handler before returning
/// (synchronous-within-a-request delivery); `subscribe` registers a handler for
/// all subsequent events. Handlers that only care about some event types simply
/// ignore the rest.
pub trait EventBus<M>: Send + Sync {
    fn publish(&self, event: M);

    fn subscribe(&self, handler: Arc<dyn EventHandler<M>>);
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    fn publish(&self, event: M) {
        (**self).publish(event)
    }

    fn subscribe(&self, handler: Arc<dyn EventHandler<M>>) {
        (**self).subscribe(handler)
    }
}
