//! Standard launcher: a grid of app tiles

use alloc::boxed::Box;

use super::variant::{Launcher, LauncherContext, LauncherResponse};
use crate::input::{Button, Direction, InputEvent};
use crate::traits::surface::{colors, LINE_HEIGHT};
use crate::traits::{Surface, SurfaceError, SurfaceExt};

const MARGIN: u16 = 8;
const TILE_HEIGHT: u16 = 40;

/// Grid columns for a catalog of `apps` entries
pub fn grid_columns(apps: usize) -> usize {
    if apps <= 8 {
        2
    } else {
        3
    }
}

/// Grid of app tiles navigated with the joystick
#[derive(Debug, Clone, Default)]
pub struct StandardLauncher {
    selected: usize,
}

impl StandardLauncher {
    pub const NAME: &'static str = "standard";

    pub fn new() -> Self {
        Self::default()
    }

    /// Factory for the variant registry
    pub fn boxed() -> Box<dyn Launcher> {
        Box::new(Self::new())
    }

    /// Catalog index of the highlighted tile
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn navigate(&mut self, direction: Direction, apps: usize) {
        if apps == 0 {
            return;
        }
        let cols = grid_columns(apps);
        let i = self.selected;
        self.selected = match direction {
            Direction::Right if i % cols < cols - 1 && i + 1 < apps => i + 1,
            Direction::Left if i % cols > 0 => i - 1,
            Direction::Down if i + cols < apps => i + cols,
            Direction::Up if i >= cols => i - cols,
            _ => i,
        };
    }
}

impl Launcher for StandardLauncher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self, ctx: &LauncherContext<'_>) {
        self.selected = ctx.recent.filter(|&i| i < ctx.apps.len()).unwrap_or(0);
    }

    fn handle_input(&mut self, event: InputEvent, ctx: &LauncherContext<'_>) -> LauncherResponse {
        match event {
            InputEvent::DirectionPressed(Direction::Center)
            | InputEvent::ButtonPressed(Button::A) => {
                if self.selected < ctx.apps.len() {
                    LauncherResponse::Launch(self.selected)
                } else {
                    LauncherResponse::Continue
                }
            }
            InputEvent::DirectionPressed(direction) => {
                self.navigate(direction, ctx.apps.len());
                LauncherResponse::Continue
            }
            InputEvent::ButtonPressed(Button::B) => LauncherResponse::Sleep,
            InputEvent::ButtonPressed(Button::Y) => LauncherResponse::switch_to("mindful"),
            _ => LauncherResponse::Continue,
        }
    }

    fn draw_screen(
        &self,
        surface: &mut dyn Surface,
        ctx: &LauncherContext<'_>,
    ) -> Result<(), SurfaceError> {
        surface.clear(colors::BLACK)?;
        surface.draw_centered(MARGIN, "Apps", colors::ACCENT)?;

        let apps = ctx.apps.len();
        if apps == 0 {
            surface.draw_centered(MARGIN * 2 + LINE_HEIGHT, "No apps", colors::GRAY)?;
        } else {
            let (width, height) = surface.size();
            let cols = grid_columns(apps);
            let tile_width =
                width.saturating_sub(MARGIN * (cols as u16 + 1)) / cols as u16;
            let top = MARGIN * 2 + LINE_HEIGHT;
            let bottom = height.saturating_sub(LINE_HEIGHT + MARGIN);
            let visible_rows = (bottom.saturating_sub(top) / (TILE_HEIGHT + MARGIN)).max(1) as usize;

            // Scroll so the selected row stays on screen
            let selected_row = self.selected / cols;
            let first_row = selected_row.saturating_sub(visible_rows - 1);

            for (i, app) in ctx.apps.iter().enumerate() {
                let row = i / cols;
                if row < first_row || row >= first_row + visible_rows {
                    continue;
                }
                let col = (i % cols) as u16;
                let x = MARGIN + col * (tile_width + MARGIN);
                let y = top + (row - first_row) as u16 * (TILE_HEIGHT + MARGIN);
                surface.draw_tile(
                    x,
                    y,
                    tile_width,
                    TILE_HEIGHT,
                    app.label.as_str(),
                    i == self.selected,
                )?;
            }
        }

        let hint = if ctx.has_touch() {
            "Tap: open  Swipe: move"
        } else {
            "A: open  B: sleep  Y: theme"
        };
        surface.draw_footer(hint)?;
        surface.flush()
    }
}
