//! Infrastructure layer: storage adapters and cross-context wiring.
//!
//! This is the only crate that sees both bounded contexts at once. It owns the
//! integration-event envelope that rides the shared bus, the handlers that
//! react to one context's events inside the other, and the in-memory adapters
//! behind each context's repository ports.

pub mod book_info;
pub mod event_bus;
pub mod projections;
pub mod repositories;

#[cfg(test)]
mod integration_tests;
