//! Host-loop glue for the pocketdeck launcher
//!
//! Ties the board-agnostic core to a running device:
//!
//! - [`boot`] - Load and report the board profile
//! - [`hardware`] - Sample input pins claimed from a pin bank
//! - [`mailbox`] - Hand touch samples from interrupt context to the loop
//! - [`session`] - One frame per tick: input, persistence, drawing
//!
//! A board port's main loop looks like:
//!
//! ```ignore
//! let profile = boot::load_profile(BOARD_ID)?;
//! let input = hardware::normalized_input(&mut bank, &profile, Some(touch))?;
//! let mut session = Session::start(&profile, apps, display, input, storage);
//! loop {
//!     match session.tick() {
//!         Tick::Running => {}
//!         Tick::Launch(app) => {
//!             run_app(app);
//!             session.resume();
//!         }
//!         Tick::Sleep => backlight.set_low(),
//!         Tick::Wake => backlight.set_high(),
//!         Tick::Exit => break,
//!     }
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]

// Must come first: the other modules use its macros
mod fmt;

pub mod boot;
pub mod hardware;
pub mod mailbox;
pub mod session;

pub use boot::load_profile;
pub use hardware::{normalized_input, HardwareInput};
pub use mailbox::{MailboxTouch, TouchMailbox};
pub use session::{Session, Tick};
