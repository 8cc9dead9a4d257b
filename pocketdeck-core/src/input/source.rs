//! Raw samples and input source traits

use pocketdeck_hal::TouchPoint;

use super::events::{Input, Polled};
use super::normalizer::InputNormalizer;

/// One hardware poll, before normalization
///
/// Pin levels are raw (`true` = high); the normalizer applies pull-up
/// polarity. Inputs that are not wired stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    levels: [Option<bool>; Input::COUNT],
    /// Analog stick `(x, y)` on the 0..=65535 scale
    pub axes: Option<(u16, u16)>,
    /// Primary touch contact
    pub touch: Option<TouchPoint>,
}

impl RawSample {
    /// Sample with nothing wired
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw level of an input's pin
    pub fn level(&self, input: Input) -> Option<bool> {
        self.levels[input.priority()]
    }

    /// Record the raw level of an input's pin
    pub fn set_level(&mut self, input: Input, high: bool) {
        self.levels[input.priority()] = Some(high);
    }

    /// Builder form of [`RawSample::set_level`]
    pub fn with_level(mut self, input: Input, high: bool) -> Self {
        self.set_level(input, high);
        self
    }

    /// Builder for the analog stick sample
    pub fn with_axes(mut self, x: u16, y: u16) -> Self {
        self.axes = Some((x, y));
        self
    }

    /// Builder for the touch contact
    pub fn with_touch(mut self, point: Option<TouchPoint>) -> Self {
        self.touch = point;
        self
    }
}

/// Reads raw hardware state
///
/// Must not block: every call returns the latest known levels.
pub trait RawSampler {
    fn sample(&mut self) -> RawSample;
}

/// Source of normalized input, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> Polled;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> Polled {
        (**self).poll()
    }
}

/// A sampler paired with its normalizer
pub struct NormalizedInput<R> {
    sampler: R,
    normalizer: InputNormalizer,
}

impl<R: RawSampler> NormalizedInput<R> {
    pub fn new(sampler: R, normalizer: InputNormalizer) -> Self {
        Self {
            sampler,
            normalizer,
        }
    }

    /// Get access to the underlying sampler
    pub fn sampler(&self) -> &R {
        &self.sampler
    }

    /// Release the sampler (and any hardware it holds)
    pub fn into_sampler(self) -> R {
        self.sampler
    }
}

impl<R: RawSampler> InputSource for NormalizedInput<R> {
    fn poll(&mut self) -> Polled {
        let sample = self.sampler.sample();
        self.normalizer.poll(&sample)
    }
}
