//! Fidget launcher: a mascot to push around, with a shortcut to the last app

use alloc::boxed::Box;

use super::variant::{Launcher, LauncherContext, LauncherResponse};
use crate::input::{Button, Direction, InputEvent};
use crate::traits::surface::{colors, LINE_HEIGHT};
use crate::traits::{Surface, SurfaceError, SurfaceExt};

/// Pixels moved per nudge
const NUDGE: i16 = 8;
/// Furthest the mascot strays from the center
const MAX_OFFSET: i16 = 80;
const MASCOT_SIZE: u16 = 24;
const MAX_ENERGY: u8 = 100;

/// Mascot nudged by the joystick
#[derive(Debug, Clone)]
pub struct FidgetLauncher {
    offset: (i16, i16),
    energy: u8,
}

impl Default for FidgetLauncher {
    fn default() -> Self {
        Self {
            offset: (0, 0),
            energy: MAX_ENERGY / 2,
        }
    }
}

impl FidgetLauncher {
    pub const NAME: &'static str = "fidget";

    pub fn new() -> Self {
        Self::default()
    }

    /// Factory for the variant registry
    pub fn boxed() -> Box<dyn Launcher> {
        Box::new(Self::new())
    }

    /// Mascot offset from the screen center
    pub fn offset(&self) -> (i16, i16) {
        self.offset
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    fn nudge(&mut self, direction: Direction) {
        let (dx, dy) = match direction {
            Direction::Up => (0, -NUDGE),
            Direction::Down => (0, NUDGE),
            Direction::Left => (-NUDGE, 0),
            Direction::Right => (NUDGE, 0),
            Direction::Center => {
                self.energy = self.energy.saturating_add(10).min(MAX_ENERGY);
                return;
            }
        };
        self.offset.0 = (self.offset.0 + dx).clamp(-MAX_OFFSET, MAX_OFFSET);
        self.offset.1 = (self.offset.1 + dy).clamp(-MAX_OFFSET, MAX_OFFSET);
        self.energy = self.energy.saturating_add(3).min(MAX_ENERGY);
    }
}

impl Launcher for FidgetLauncher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self, _ctx: &LauncherContext<'_>) {
        *self = Self::default();
    }

    fn handle_input(&mut self, event: InputEvent, ctx: &LauncherContext<'_>) -> LauncherResponse {
        match event {
            InputEvent::DirectionPressed(direction) => {
                self.nudge(direction);
                LauncherResponse::Continue
            }
            InputEvent::ButtonPressed(Button::A) => {
                let last = ctx.recent.filter(|&i| i < ctx.apps.len());
                match last.or((!ctx.apps.is_empty()).then_some(0)) {
                    Some(index) => LauncherResponse::Launch(index),
                    None => LauncherResponse::Continue,
                }
            }
            InputEvent::ButtonPressed(Button::B) => LauncherResponse::Exit,
            InputEvent::ButtonPressed(Button::Y) => LauncherResponse::switch_to("standard"),
            _ => LauncherResponse::Continue,
        }
    }

    fn draw_screen(
        &self,
        surface: &mut dyn Surface,
        ctx: &LauncherContext<'_>,
    ) -> Result<(), SurfaceError> {
        surface.clear(colors::BLACK)?;
        let (width, height) = surface.size();

        let cx = (width / 2) as i32 + self.offset.0 as i32 - (MASCOT_SIZE / 2) as i32;
        let cy = (height / 2) as i32 + self.offset.1 as i32 - (MASCOT_SIZE / 2) as i32;
        surface.fill_rect(
            cx.max(0) as u16,
            cy.max(0) as u16,
            MASCOT_SIZE,
            MASCOT_SIZE,
            colors::HIGHLIGHT,
        )?;

        // Energy bar along the top
        let bar = (width as u32 * self.energy as u32 / MAX_ENERGY as u32) as u16;
        surface.fill_rect(0, 0, bar, 4, colors::ACCENT)?;

        if let Some(label) = ctx.recent.and_then(|i| ctx.apps.label(i)) {
            surface.draw_centered(LINE_HEIGHT, label, colors::GRAY)?;
        }

        let hint = if ctx.has_touch() {
            "Swipe: play  A: last app"
        } else {
            "Stick: play  A: last app"
        };
        surface.draw_footer(hint)?;
        surface.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::catalog::AppCatalog;
    use crate::profile::Capabilities;

    #[test]
    fn test_nudge_clamps() {
        let apps = AppCatalog::new();
        let ctx = LauncherContext {
            apps: &apps,
            capabilities: Capabilities::empty(),
            recent: None,
        };
        let mut l = FidgetLauncher::new();
        for _ in 0..20 {
            l.handle_input(InputEvent::DirectionPressed(Direction::Left), &ctx);
        }
        assert_eq!(l.offset(), (-MAX_OFFSET, 0));
        assert_eq!(l.energy(), MAX_ENERGY);

        l.init(&ctx);
        assert_eq!(l.offset(), (0, 0));
    }

    #[test]
    fn test_open_last_app() {
        let apps = AppCatalog::from_labels(&["Breath", "Journal"]).unwrap();
        let mut ctx = LauncherContext {
            apps: &apps,
            capabilities: Capabilities::empty(),
            recent: Some(1),
        };
        let mut l = FidgetLauncher::new();
        assert_eq!(
            l.handle_input(InputEvent::ButtonPressed(Button::A), &ctx),
            LauncherResponse::Launch(1)
        );
        ctx.recent = None;
        assert_eq!(
            l.handle_input(InputEvent::ButtonPressed(Button::A), &ctx),
            LauncherResponse::Launch(0)
        );
        assert_eq!(
            l.handle_input(InputEvent::ButtonPressed(Button::B), &ctx),
            LauncherResponse::Exit
        );
        assert_eq!(
            l.handle_input(InputEvent::ButtonPressed(Button::Y), &ctx),
            LauncherResponse::switch_to("standard")
        );
    }
}
