//! Session driver: a deterministic host event loop around the engine.
//!
//! The engine never owns a clock. `Session` plays the part of the host: it
//! keeps a virtual millisecond clock, schedules the delayed evaluation after
//! a second selection and the periodic tick, and records what happened as a
//! list of [`SessionEvent`]s for the renderer.
//!
//! ## Ordering
//!
//! Callbacks fire strictly in due-time order; ties fire in the order they
//! were scheduled. Starting or resetting purges every pending callback and
//! stamps new ones with the new [`Generation`], so nothing scheduled for an
//! earlier game can reach the current one.

pub mod scheduler;

pub use scheduler::{Session, SessionEvent, TimerKind};
