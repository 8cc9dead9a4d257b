//! Canonical input events
//!
//! Every board, whatever its joystick hardware, is reduced to these events.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Joystick direction (Center is the stick's push button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Center,
}

/// Face button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    A,
    B,
    X,
    Y,
}

impl Button {
    /// All buttons in declaration order
    pub const ALL: [Button; 4] = [Button::A, Button::B, Button::X, Button::Y];

    /// Single-letter label
    pub fn label(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::X => "X",
            Button::Y => "Y",
        }
    }
}

/// One of the nine logical inputs
///
/// When several inputs change during the same poll, [`Input::PRIORITY`]
/// decides which is reported first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Direction(Direction),
    Button(Button),
}

impl Input {
    /// Number of logical inputs
    pub const COUNT: usize = 9;

    /// All inputs, highest priority first
    pub const PRIORITY: [Input; Input::COUNT] = [
        Input::Direction(Direction::Center),
        Input::Direction(Direction::Up),
        Input::Direction(Direction::Down),
        Input::Direction(Direction::Left),
        Input::Direction(Direction::Right),
        Input::Button(Button::A),
        Input::Button(Button::B),
        Input::Button(Button::X),
        Input::Button(Button::Y),
    ];

    /// Position in [`Input::PRIORITY`] (0 = highest)
    pub fn priority(self) -> usize {
        match self {
            Input::Direction(Direction::Center) => 0,
            Input::Direction(Direction::Up) => 1,
            Input::Direction(Direction::Down) => 2,
            Input::Direction(Direction::Left) => 3,
            Input::Direction(Direction::Right) => 4,
            Input::Button(Button::A) => 5,
            Input::Button(Button::B) => 6,
            Input::Button(Button::X) => 7,
            Input::Button(Button::Y) => 8,
        }
    }

    /// Event reporting this input's new level
    pub fn event(self, pressed: bool) -> InputEvent {
        match (self, pressed) {
            (Input::Direction(d), true) => InputEvent::DirectionPressed(d),
            (Input::Direction(d), false) => InputEvent::DirectionReleased(d),
            (Input::Button(b), true) => InputEvent::ButtonPressed(b),
            (Input::Button(b), false) => InputEvent::ButtonReleased(b),
        }
    }
}

/// Hardware-agnostic input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    DirectionPressed(Direction),
    DirectionReleased(Direction),
    ButtonPressed(Button),
    ButtonReleased(Button),
}

impl InputEvent {
    /// The logical input this event reports on
    pub fn input(&self) -> Input {
        match *self {
            InputEvent::DirectionPressed(d) | InputEvent::DirectionReleased(d) => {
                Input::Direction(d)
            }
            InputEvent::ButtonPressed(b) | InputEvent::ButtonReleased(b) => Input::Button(b),
        }
    }

    /// Returns true for press events
    pub fn is_press(&self) -> bool {
        matches!(
            self,
            InputEvent::DirectionPressed(_) | InputEvent::ButtonPressed(_)
        )
    }

    /// Returns the pressed direction, if this is a direction press
    pub fn pressed_direction(&self) -> Option<Direction> {
        match *self {
            InputEvent::DirectionPressed(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the pressed button, if this is a button press
    pub fn pressed_button(&self) -> Option<Button> {
        match *self {
            InputEvent::ButtonPressed(b) => Some(b),
            _ => None,
        }
    }
}

/// Result of one normalizer poll
///
/// At most one input changes per poll. A touch gesture is momentary: its
/// press and release arrive together in one [`Polled::Momentary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polled {
    /// Nothing changed
    #[default]
    Idle,
    /// A single edge
    Event(InputEvent),
    /// Press immediately followed by its release
    Momentary(Input),
}

impl Polled {
    /// Returns true when nothing was produced
    pub fn is_idle(&self) -> bool {
        matches!(self, Polled::Idle)
    }

    /// Input this result reports on
    pub fn input(&self) -> Option<Input> {
        match *self {
            Polled::Idle => None,
            Polled::Event(e) => Some(e.input()),
            Polled::Momentary(input) => Some(input),
        }
    }

    /// Events in delivery order
    pub fn events(&self) -> PolledEvents {
        let (first, second) = match *self {
            Polled::Idle => (None, None),
            Polled::Event(e) => (Some(e), None),
            Polled::Momentary(input) => (Some(input.event(true)), Some(input.event(false))),
        };
        PolledEvents { first, second }
    }
}

/// Iterator over the events of a [`Polled`]
#[derive(Debug, Clone)]
pub struct PolledEvents {
    first: Option<InputEvent>,
    second: Option<InputEvent>,
}

impl Iterator for PolledEvents {
    type Item = InputEvent;

    fn next(&mut self) -> Option<InputEvent> {
        self.first.take().or_else(|| self.second.take())
    }
}
