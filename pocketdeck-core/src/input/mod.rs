//! Input normalization
//!
//! Digital switches, analog sticks and touch panels all end up as the same
//! canonical [`InputEvent`]s, at most one per poll.

pub mod analog;
pub mod debounce;
pub mod events;
pub mod normalizer;
pub mod source;
pub mod touch;

pub use events::{Button, Direction, Input, InputEvent, Polled, PolledEvents};
pub use normalizer::InputNormalizer;
pub use source::{InputSource, NormalizedInput, RawSample, RawSampler};
pub use touch::Gesture;
