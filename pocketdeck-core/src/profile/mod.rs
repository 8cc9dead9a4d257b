//! Device profile model
//!
//! A board is described by a declarative table, parsed into a
//! [`DeviceProfile`], validated once, and then only ever borrowed.

pub mod capability;
pub mod hardware;
pub mod types;
pub mod validate;

pub use capability::*;
pub use hardware::*;
pub use types::*;
pub use validate::*;
