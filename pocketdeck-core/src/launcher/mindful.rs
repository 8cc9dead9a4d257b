//! Mindful launcher: one app in focus at a time

use alloc::boxed::Box;
use core::fmt::Write;

use heapless::String;

use super::variant::{Launcher, LauncherContext, LauncherResponse};
use crate::input::{Button, Direction, InputEvent};
use crate::traits::surface::{colors, LINE_HEIGHT};
use crate::traits::{Surface, SurfaceError, SurfaceExt};

/// Single focused app, cycled with Up/Down
#[derive(Debug, Clone, Default)]
pub struct MindfulLauncher {
    focus: usize,
}

impl MindfulLauncher {
    pub const NAME: &'static str = "mindful";

    pub fn new() -> Self {
        Self::default()
    }

    /// Factory for the variant registry
    pub fn boxed() -> Box<dyn Launcher> {
        Box::new(Self::new())
    }

    /// Catalog index of the focused app
    pub fn focus(&self) -> usize {
        self.focus
    }
}

impl Launcher for MindfulLauncher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self, _ctx: &LauncherContext<'_>) {
        self.focus = 0;
    }

    fn handle_input(&mut self, event: InputEvent, ctx: &LauncherContext<'_>) -> LauncherResponse {
        let apps = ctx.apps.len();
        match event {
            InputEvent::DirectionPressed(Direction::Up) if apps > 0 => {
                self.focus = (self.focus + apps - 1) % apps;
                LauncherResponse::Continue
            }
            InputEvent::DirectionPressed(Direction::Down) if apps > 0 => {
                self.focus = (self.focus + 1) % apps;
                LauncherResponse::Continue
            }
            InputEvent::ButtonPressed(Button::A) if self.focus < apps => {
                LauncherResponse::Launch(self.focus)
            }
            InputEvent::ButtonPressed(Button::B) => LauncherResponse::Sleep,
            InputEvent::ButtonPressed(Button::Y) => LauncherResponse::switch_to("fidget"),
            _ => LauncherResponse::Continue,
        }
    }

    fn draw_screen(
        &self,
        surface: &mut dyn Surface,
        ctx: &LauncherContext<'_>,
    ) -> Result<(), SurfaceError> {
        surface.clear(colors::BLACK)?;
        let (_, height) = surface.size();
        let middle = height / 2;

        surface.draw_centered(LINE_HEIGHT, "One thing at a time", colors::CALM)?;

        match ctx.apps.label(self.focus) {
            Some(label) => {
                surface.draw_centered(middle.saturating_sub(LINE_HEIGHT), label, colors::WHITE)?;
                let mut position: String<12> = String::new();
                let _ = write!(position, "{} / {}", self.focus + 1, ctx.apps.len());
                surface.draw_centered(middle + LINE_HEIGHT, &position, colors::GRAY)?;
            }
            None => surface.draw_centered(middle, "Nothing to do. Breathe.", colors::GRAY)?,
        }

        let hint = if ctx.has_touch() {
            "Swipe: next  A: open"
        } else {
            "Up/Down: next  A: open"
        };
        surface.draw_footer(hint)?;
        surface.flush()
    }
}
