//! Collaborator traits
//!
//! Interfaces the core draws through without knowing the panel behind them.

pub mod surface;

pub use surface::{Color, Surface, SurfaceError, SurfaceExt};
