//! Board-agnostic core logic for the pocketdeck launcher
//!
//! This crate contains all launcher logic that does not depend on a
//! specific board:
//!
//! - Device profile model, validation and capability query
//! - Input normalization (digital, analog, touch-emulated joysticks)
//! - Launcher variants and the orchestrator that runs them
//! - Launcher preference persistence
//! - Drawing surface trait

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod input;
pub mod launcher;
pub mod prefs;
pub mod profile;
pub mod traits;
