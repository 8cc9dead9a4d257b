//! Hardware input sampling
//!
//! Claims the pins a profile declares for input and reads them into one
//! [`RawSample`] per poll. Claims are held for as long as the
//! [`HardwareInput`] lives.

use heapless::Vec;

use pocketdeck_core::input::{Input, InputNormalizer, NormalizedInput, RawSample, RawSampler};
use pocketdeck_core::profile::{DeviceProfile, JoystickConfig, MAX_DIGITAL_LINES};
use pocketdeck_hal::{AnalogInput, InputPin, PinBank, PinError, TouchPanel};

/// Raw input from claimed pins and an optional touch panel
pub struct HardwareInput<B: PinBank, T> {
    lines: Vec<(Input, B::Input), MAX_DIGITAL_LINES>,
    axes: Option<(B::Analog, B::Analog)>,
    touch: Option<T>,
}

impl<B: PinBank, T: TouchPanel> HardwareInput<B, T> {
    /// Claim every input pin the profile declares
    ///
    /// `touch` is only kept for touch-emulated joysticks. On error, pins
    /// claimed so far are released.
    pub fn claim(bank: &mut B, profile: &DeviceProfile, touch: Option<T>) -> Result<Self, PinError> {
        let mut lines = Vec::new();
        for line in profile.digital_lines() {
            let pin = bank.take_input(line.pin, line.pull_up)?;
            // digital_lines() never yields more than MAX_DIGITAL_LINES
            let _ = lines.push((line.input, pin));
        }

        let axes = match &profile.joystick {
            JoystickConfig::Analog(analog) => {
                let x = bank.take_analog(analog.x_pin)?;
                let y = bank.take_analog(analog.y_pin)?;
                Some((x, y))
            }
            _ => None,
        };

        let touch = match &profile.joystick {
            JoystickConfig::Touch(_) => {
                if touch.is_none() {
                    warn!("Touch joystick without a touch panel; no directional input");
                }
                touch
            }
            _ => None,
        };

        debug!(
            "Claimed {} input lines, analog={}, touch={}",
            lines.len(),
            axes.is_some(),
            touch.is_some()
        );
        Ok(Self { lines, axes, touch })
    }

    /// Number of claimed digital lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Release the touch panel
    pub fn into_touch(self) -> Option<T> {
        self.touch
    }
}

impl<B: PinBank, T: TouchPanel> RawSampler for HardwareInput<B, T> {
    fn sample(&mut self) -> RawSample {
        let mut sample = RawSample::new();
        for (input, pin) in &self.lines {
            sample.set_level(*input, pin.is_high());
        }
        if let Some((x, y)) = self.axes.as_mut() {
            sample.axes = Some((x.read_u16(), y.read_u16()));
        }
        if let Some(touch) = self.touch.as_mut() {
            sample.touch = touch.primary_contact();
        }
        sample
    }
}

/// Claim a profile's inputs and wrap them in a normalizer
pub fn normalized_input<B: PinBank, T: TouchPanel>(
    bank: &mut B,
    profile: &DeviceProfile,
    touch: Option<T>,
) -> Result<NormalizedInput<HardwareInput<B, T>>, PinError> {
    let hardware = HardwareInput::claim(bank, profile, touch)?;
    Ok(NormalizedInput::new(hardware, InputNormalizer::new(profile)))
}
