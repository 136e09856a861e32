//! Simulation core of a side-scrolling platformer.
//!
//! The core is pure state plus a fixed-step `tick`: input intents go in,
//! a [`snapshot::Snapshot`] and a list of cosmetic [`events::GameEvent`]s
//! come out.  Rendering, audio and input devices live outside the crate.

pub mod camera;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod events;
pub mod input;
pub mod level;
pub mod lifecycle;
pub mod logging;
pub mod physics;
pub mod snapshot;
pub mod theme;
