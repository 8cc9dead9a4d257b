//! Analog input abstraction
//!
//! Samples are normalized to the full unsigned 16-bit range regardless of
//! the converter's native resolution (the RP2040 ADC is 12-bit, for example,
//! and ports shift its result up).

/// Full-scale value of a normalized analog sample
pub const ADC_FULL_SCALE: u16 = u16::MAX;

/// Nominal mid-scale value (joystick at rest)
pub const ADC_CENTER: u16 = 32768;

/// A single analog input channel
pub trait AnalogInput {
    /// Read the latest sample (0..=65535)
    ///
    /// Returns immediately with the most recent conversion.
    fn read_u16(&mut self) -> u16;
}

/// Scale a raw sample of `bits` resolution to the 16-bit range
///
/// Values wider than 16 bits are truncated to their top 16 bits.
pub fn scale_to_u16(raw: u32, bits: u8) -> u16 {
    match bits {
        0 => 0,
        1..=15 => {
            let max = (1u32 << bits) - 1;
            let clamped = raw.min(max);
            ((clamped * ADC_FULL_SCALE as u32) / max) as u16
        }
        16 => raw.min(ADC_FULL_SCALE as u32) as u16,
        _ => (raw >> (bits - 16)).min(ADC_FULL_SCALE as u32) as u16,
    }
}
