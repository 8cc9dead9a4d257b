//! Touch-emulated joystick
//!
//! A contact is tracked from touch-down to lift. Three outcomes:
//!
//! - it started in a button zone and never left it: that zone's button;
//! - it travelled further than the swipe threshold: a direction, chosen by
//!   the dominant axis. Fires as soon as the threshold is crossed;
//! - anything else is a tap, reported as Center.
//!
//! All gestures are momentary.

use pocketdeck_hal::TouchPoint;

use crate::input::{Button, Direction, Input};
use crate::profile::{TouchJoystickConfig, TouchZone};

/// Recognized gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    Zone(Button),
    Swipe(Direction),
    Tap,
}

impl Gesture {
    /// Logical input this gesture presses and releases
    pub fn input(self) -> Input {
        match self {
            Gesture::Zone(button) => Input::Button(button),
            Gesture::Swipe(direction) => Input::Direction(direction),
            Gesture::Tap => Input::Direction(Direction::Center),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Contact {
    start: TouchPoint,
    last: TouchPoint,
    zone: Option<TouchZone>,
    left_zone: bool,
    swiped: bool,
}

/// Gesture recognizer for one touch panel
#[derive(Debug, Clone)]
pub struct TouchGestures {
    config: TouchJoystickConfig,
    contact: Option<Contact>,
}

impl TouchGestures {
    pub fn new(config: TouchJoystickConfig) -> Self {
        Self {
            config,
            contact: None,
        }
    }

    /// Returns true while a finger is down
    pub fn is_touching(&self) -> bool {
        self.contact.is_some()
    }

    /// Feed the current contact (or `None` when lifted)
    pub fn update(&mut self, point: Option<TouchPoint>) -> Option<Gesture> {
        match point {
            Some(point) => self.on_contact(point),
            None => self.on_lift(),
        }
    }

    fn on_contact(&mut self, point: TouchPoint) -> Option<Gesture> {
        let threshold = self.config.swipe_threshold;
        let Some(contact) = self.contact.as_mut() else {
            let zone = self.config.zone_at(point).copied();
            self.contact = Some(Contact {
                start: point,
                last: point,
                zone,
                left_zone: false,
                swiped: false,
            });
            return None;
        };

        contact.last = point;
        if let Some(zone) = contact.zone {
            if !zone.contains(point) {
                contact.left_zone = true;
            }
        }
        let zone_held = contact.zone.is_some() && !contact.left_zone;
        if contact.swiped || zone_held {
            return None;
        }
        let swipe = swipe_direction(contact.start, point, threshold)?;
        contact.swiped = true;
        Some(Gesture::Swipe(swipe))
    }

    fn on_lift(&mut self) -> Option<Gesture> {
        let contact = self.contact.take()?;
        if contact.swiped {
            return None;
        }
        if let (Some(zone), false) = (contact.zone, contact.left_zone) {
            return Some(Gesture::Zone(zone.button));
        }
        let swipe = swipe_direction(contact.start, contact.last, self.config.swipe_threshold);
        Some(swipe.map_or(Gesture::Tap, Gesture::Swipe))
    }
}

/// Direction of a swipe from `start` to `end`, if it travelled far enough
///
/// The displacement must strictly exceed `threshold` pixels. Screen y
/// grows downward, so a negative dy is Up.
pub fn swipe_direction(start: TouchPoint, end: TouchPoint, threshold: u16) -> Option<Direction> {
    let (dx, dy) = end.delta_from(start);
    let distance_sq = (dx as i64).pow(2) + (dy as i64).pow(2);
    if distance_sq <= (threshold as i64).pow(2) {
        return None;
    }
    let direction = if dx.abs() > dy.abs() {
        if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy < 0 {
        Direction::Up
    } else {
        Direction::Down
    };
    Some(direction)
}
