//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the core mechanics and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A [`Controller`] owning one engine: event fan-out, frame-scheduler
//!   re-arming, and whole-engine re-activation that preserves the selected
//!   index across resizes
//! - An [`EventEmitter`] (multi-listener pub/sub with idempotent removal)
//! - An [`EventStore`] of scoped disposers for host listener lifecycles
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controller;
mod events;

#[cfg(test)]
mod tests;

pub use controller::{Controller, SchedulerHooks};
pub use events::{EventEmitter, EventStore, Listener, ListenerId};
