//! pocketdeck Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits that each board
//! port implements. The launcher core only ever sees these traits, so the
//! same application code runs on a 5-way joystick LCD board, an analog
//! joystick board or a touch-only AMOLED watch.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pocketdeck-runtime / pocketdeck-core   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pocketdeck-hal (this crate - traits)   │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  RP2040 port  │       │  ESP32-S3     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::InputPin`] - Digital input
//! - [`adc::AnalogInput`] - 16-bit analog sampling
//! - [`touch::TouchPanel`] - Capacitive touch contact
//! - [`pins::PinBank`] - Claiming pins by number
//! - [`storage::KeyValueStorage`] - Persistent storage

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pins;
pub mod storage;
pub mod touch;

#[cfg(feature = "std")]
pub mod host;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogInput, ADC_CENTER, ADC_FULL_SCALE};
pub use gpio::InputPin;
pub use pins::{PinBank, PinError};
pub use storage::{KeyValueStorage, StorageError, StorageKey};
pub use touch::{TouchPanel, TouchPoint};
