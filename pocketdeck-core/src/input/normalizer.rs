//! Input normalizer
//!
//! Turns one [`RawSample`] per poll into at most one canonical event.
//!
//! Every logical input keeps the level last reported upstream and the level
//! the hardware currently shows. When they differ the input is *pending*,
//! stamped with the poll at which it diverged. Each poll reports the oldest
//! pending input, ties broken by [`Input::PRIORITY`]; the rest wait. A
//! pending input whose level reverts before it is reported is dropped, so a
//! press is never reported twice while held.
//!
//! Touch gestures are momentary and queue behind older pending inputs by
//! the same rule.

use heapless::{Deque, Vec};

use super::analog::AnalogStick;
use super::debounce::{is_active, Debouncer};
use super::events::{Direction, Input, Polled};
use super::source::RawSample;
use super::touch::TouchGestures;
use crate::profile::{DeviceProfile, DigitalLine, JoystickConfig, MAX_DIGITAL_LINES};

/// Gestures that can wait behind older inputs
///
/// A gesture waits for at most one report per older pending input.
const MAX_PENDING_GESTURES: usize = Input::COUNT;

const STICK_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

#[derive(Debug, Clone, Copy, Default)]
struct Channel {
    /// Level the hardware currently shows
    current: bool,
    /// Level last reported upstream
    reported: bool,
    /// Poll at which `current` diverged from `reported`
    pending_since: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
struct PendingGesture {
    input: Input,
    since: u32,
}

#[derive(Debug, Clone, Copy)]
enum Candidate {
    Level(Input),
    Gesture,
}

/// Normalizes raw samples for one device profile
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    lines: Vec<(DigitalLine, Debouncer), MAX_DIGITAL_LINES>,
    stick: Option<AnalogStick>,
    touch: Option<TouchGestures>,
    channels: [Channel; Input::COUNT],
    gestures: Deque<PendingGesture, MAX_PENDING_GESTURES>,
    polls: u32,
}

impl InputNormalizer {
    /// Create a normalizer with every input released
    pub fn new(profile: &DeviceProfile) -> Self {
        let debounce = profile.input.debounce_polls;
        let lines = profile
            .digital_lines()
            .into_iter()
            .map(|line| (line, Debouncer::new(debounce)))
            .collect();

        let (stick, touch) = match &profile.joystick {
            JoystickConfig::Digital(_) => (None, None),
            JoystickConfig::Analog(analog) => (Some(AnalogStick::new(analog.clone())), None),
            JoystickConfig::Touch(touch) => (None, Some(TouchGestures::new(touch.clone()))),
        };

        Self {
            lines,
            stick,
            touch,
            channels: [Channel::default(); Input::COUNT],
            gestures: Deque::new(),
            polls: 0,
        }
    }

    /// Returns true if any input is waiting to be reported
    pub fn has_pending(&self) -> bool {
        !self.gestures.is_empty() || self.channels.iter().any(|c| c.pending_since.is_some())
    }

    /// Process one hardware poll
    pub fn poll(&mut self, sample: &RawSample) -> Polled {
        let now = self.polls;
        self.polls = self.polls.wrapping_add(1);

        for i in 0..self.lines.len() {
            let (line, debouncer) = &mut self.lines[i];
            let Some(level) = sample.level(line.input) else {
                continue;
            };
            let input = line.input;
            let active = debouncer.update(is_active(level, line.pull_up));
            self.observe(input, active, now);
        }

        let held = match (self.stick.as_mut(), sample.axes) {
            (Some(stick), Some((x, y))) => {
                stick.update(x, y);
                Some(STICK_DIRECTIONS.map(|dir| stick.is_held(dir)))
            }
            _ => None,
        };
        if let Some(held) = held {
            for (dir, active) in STICK_DIRECTIONS.into_iter().zip(held) {
                self.observe(Input::Direction(dir), active, now);
            }
        }

        if let Some(touch) = self.touch.as_mut() {
            if let Some(gesture) = touch.update(sample.touch) {
                if self.gestures.is_full() {
                    // Oldest gesture gives way
                    self.gestures.pop_front();
                }
                let _ = self.gestures.push_back(PendingGesture {
                    input: gesture.input(),
                    since: now,
                });
            }
        }

        self.report(now)
    }

    fn observe(&mut self, input: Input, active: bool, now: u32) {
        let channel = &mut self.channels[input.priority()];
        channel.current = active;
        if active == channel.reported {
            channel.pending_since = None;
        } else if channel.pending_since.is_none() {
            channel.pending_since = Some(now);
        }
    }

    fn report(&mut self, now: u32) -> Polled {
        // (age, priority, candidate): oldest first, then highest priority
        let mut best: Option<(u32, usize, Candidate)> = None;
        let mut consider = |age: u32, priority: usize, candidate: Candidate| {
            let better = match best {
                None => true,
                Some((best_age, best_priority, _)) => {
                    age > best_age || (age == best_age && priority < best_priority)
                }
            };
            if better {
                best = Some((age, priority, candidate));
            }
        };

        for input in Input::PRIORITY {
            if let Some(since) = self.channels[input.priority()].pending_since {
                consider(now.wrapping_sub(since), input.priority(), Candidate::Level(input));
            }
        }
        if let Some(gesture) = self.gestures.front() {
            consider(
                now.wrapping_sub(gesture.since),
                gesture.input.priority(),
                Candidate::Gesture,
            );
        }

        match best {
            None => Polled::Idle,
            Some((_, _, Candidate::Level(input))) => {
                let channel = &mut self.channels[input.priority()];
                channel.reported = channel.current;
                channel.pending_since = None;
                Polled::Event(input.event(channel.current))
            }
            Some((_, _, Candidate::Gesture)) => match self.gestures.pop_front() {
                Some(gesture) => Polled::Momentary(gesture.input),
                None => Polled::Idle,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Button, InputEvent};
    use crate::profile::{
        AnalogJoystickConfig, DigitalJoystickConfig, TouchJoystickConfig, TouchZone,
    };
    use pocketdeck_hal::TouchPoint;

    const LEFT: Input = Input::Direction(Direction::Left);
    const UP: Input = Input::Direction(Direction::Up);
    const A: Input = Input::Button(Button::A);

    fn digital_profile(debounce: u8) -> DeviceProfile {
        let mut profile = DeviceProfile::new(
            "WAVESHARE_1.3",
            "Waveshare 1.3",
            JoystickConfig::Digital(DigitalJoystickConfig {
                up: 2,
                down: 18,
                left: 16,
                right: 20,
                center: 3,
                pull_up: true,
            }),
        );
        profile.buttons.a = Some(15);
        profile.buttons.b = Some(17);
        profile.input.debounce_polls = debounce;
        profile
    }

    /// All wired pins released (high, with pull-ups)
    fn idle() -> RawSample {
        let mut sample = RawSample::new();
        for input in Input::PRIORITY {
            sample.set_level(input, true);
        }
        sample
    }

    fn pressed(inputs: &[Input]) -> RawSample {
        let mut sample = idle();
        for &input in inputs {
            sample.set_level(input, false);
        }
        sample
    }

    #[test]
    fn test_digital_press_hold_release() {
        let mut n = InputNormalizer::new(&digital_profile(2));
        assert_eq!(n.poll(&idle()), Polled::Idle);

        // Debounce: first poll pending, second honored
        assert_eq!(n.poll(&pressed(&[LEFT])), Polled::Idle);
        assert_eq!(
            n.poll(&pressed(&[LEFT])),
            Polled::Event(InputEvent::DirectionPressed(Direction::Left))
        );
        // Held steady: nothing more
        for _ in 0..5 {
            assert_eq!(n.poll(&pressed(&[LEFT])), Polled::Idle);
        }
        assert_eq!(n.poll(&idle()), Polled::Idle);
        assert_eq!(
            n.poll(&idle()),
            Polled::Event(InputEvent::DirectionReleased(Direction::Left))
        );
        assert_eq!(n.poll(&idle()), Polled::Idle);
    }

    #[test]
    fn test_simultaneous_presses_follow_priority() {
        let mut n = InputNormalizer::new(&digital_profile(1));
        let both = pressed(&[A, LEFT, UP]);
        assert_eq!(
            n.poll(&both),
            Polled::Event(InputEvent::DirectionPressed(Direction::Up))
        );
        assert_eq!(
            n.poll(&both),
            Polled::Event(InputEvent::DirectionPressed(Direction::Left))
        );
        assert_eq!(
            n.poll(&both),
            Polled::Event(InputEvent::ButtonPressed(Button::A))
        );
        assert_eq!(n.poll(&both), Polled::Idle);
    }

    #[test]
    fn test_deferred_input_beats_newer_higher_priority() {
        let mut n = InputNormalizer::new(&digital_profile(1));
        // A and Left together: Left wins, A deferred
        assert_eq!(
            n.poll(&pressed(&[A, LEFT])),
            Polled::Event(InputEvent::DirectionPressed(Direction::Left))
        );
        // Up arrives now but A has been waiting longer
        assert_eq!(
            n.poll(&pressed(&[A, LEFT, UP])),
            Polled::Event(InputEvent::ButtonPressed(Button::A))
        );
        assert_eq!(
            n.poll(&pressed(&[A, LEFT, UP])),
            Polled::Event(InputEvent::DirectionPressed(Direction::Up))
        );
    }

    #[test]
    fn test_deferred_input_reverting_is_dropped() {
        let mut n = InputNormalizer::new(&digital_profile(1));
        assert_eq!(
            n.poll(&pressed(&[A, UP])),
            Polled::Event(InputEvent::DirectionPressed(Direction::Up))
        );
        // A released before it was reported
        assert_eq!(n.poll(&pressed(&[UP])), Polled::Idle);
        assert!(!n.has_pending());
    }

    #[test]
    fn test_unwired_inputs_ignored() {
        let mut n = InputNormalizer::new(&digital_profile(1));
        // Y has no pin; a sample claiming it is pressed changes nothing
        let sample = idle().with_level(Input::Button(Button::Y), false);
        assert_eq!(n.poll(&sample), Polled::Idle);
    }

    fn analog_profile(invert_y: bool) -> DeviceProfile {
        DeviceProfile::new(
            "GEEKPI_3_5",
            "GeekPi",
            JoystickConfig::Analog(AnalogJoystickConfig {
                x_pin: 27,
                y_pin: 26,
                center: 22,
                pull_up: true,
                threshold_low: 20000,
                threshold_high: 45000,
                center_range: 5000,
                center_value: 32768,
                invert_x: false,
                invert_y,
            }),
        )
    }

    #[test]
    fn test_analog_down_once() {
        let mut n = InputNormalizer::new(&analog_profile(false));
        assert_eq!(n.poll(&idle().with_axes(32768, 32768)), Polled::Idle);
        assert_eq!(
            n.poll(&idle().with_axes(32768, 15000)),
            Polled::Event(InputEvent::DirectionPressed(Direction::Down))
        );
        assert_eq!(n.poll(&idle().with_axes(32768, 15000)), Polled::Idle);
        // Dead band: still held
        assert_eq!(n.poll(&idle().with_axes(32768, 25000)), Polled::Idle);
        assert_eq!(
            n.poll(&idle().with_axes(32768, 32768)),
            Polled::Event(InputEvent::DirectionReleased(Direction::Down))
        );
    }

    #[test]
    fn test_analog_inverted_is_up() {
        let mut n = InputNormalizer::new(&analog_profile(true));
        n.poll(&idle().with_axes(32768, 32768));
        assert_eq!(
            n.poll(&idle().with_axes(32768, 15000)),
            Polled::Event(InputEvent::DirectionPressed(Direction::Up))
        );
    }

    fn touch_profile() -> DeviceProfile {
        let mut zones = heapless::Vec::new();
        zones
            .push(TouchZone {
                button: Button::A,
                x: 320,
                y: 420,
                width: 80,
                height: 60,
            })
            .unwrap();
        DeviceProfile::new(
            "WAVESHARE_S3_AMOLED_2.06",
            "AMOLED",
            JoystickConfig::Touch(TouchJoystickConfig {
                swipe_threshold: 50,
                zones,
            }),
        )
    }

    fn touch(x: u16, y: u16) -> RawSample {
        RawSample::new().with_touch(Some(TouchPoint::new(x, y)))
    }

    #[test]
    fn test_touch_swipe_momentary() {
        let mut n = InputNormalizer::new(&touch_profile());
        assert_eq!(n.poll(&touch(100, 300)), Polled::Idle);
        let polled = n.poll(&touch(100, 200));
        assert_eq!(polled, Polled::Momentary(UP));
        let mut events = polled.events();
        assert_eq!(events.next(), Some(InputEvent::DirectionPressed(Direction::Up)));
        assert_eq!(events.next(), Some(InputEvent::DirectionReleased(Direction::Up)));
        assert_eq!(n.poll(&RawSample::new()), Polled::Idle);
    }

    #[test]
    fn test_touch_zone_button() {
        let mut n = InputNormalizer::new(&touch_profile());
        assert_eq!(n.poll(&touch(340, 440)), Polled::Idle);
        assert_eq!(n.poll(&touch(350, 450)), Polled::Idle);
        assert_eq!(n.poll(&RawSample::new()), Polled::Momentary(A));
    }
}
