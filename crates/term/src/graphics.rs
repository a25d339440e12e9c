//! TermGraphics: the crossterm backend behind the graphics contract.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::error;

use arcade_core::{Graphics, Grid};
use arcade_input::map_key_event;
use arcade_types::Input;

use crate::fb::FrameBuffer;
use crate::grid_view::{GridView, Viewport};
use crate::renderer::TerminalRenderer;

const FALLBACK_VIEWPORT: (u16, u16) = (80, 24);

/// Terminal graphics module: raw mode + alternate screen for the life of
/// the instance, restored on drop so a swapped-in replacement starts from
/// a clean terminal.
pub struct TermGraphics {
    renderer: TerminalRenderer,
    view: GridView,
    fb: FrameBuffer,
}

impl TermGraphics {
    pub fn new() -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view: GridView::default(),
            fb: FrameBuffer::new(0, 0),
        })
    }
}

impl Graphics for TermGraphics {
    /// Non-blocking: reports `Input::None` when no event is pending.
    fn poll_input(&mut self) -> Input {
        match event::poll(Duration::ZERO) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => map_key_event(key),
                Ok(Event::Resize(_, _)) => {
                    self.renderer.invalidate();
                    Input::None
                }
                Ok(_) => Input::None,
                Err(err) => {
                    error!(error = %err, "event read failed");
                    Input::None
                }
            },
            Ok(false) => Input::None,
            Err(err) => {
                error!(error = %err, "event poll failed");
                Input::None
            }
        }
    }

    fn draw(&mut self, snapshot: &Grid) {
        let (w, h) = terminal::size().unwrap_or(FALLBACK_VIEWPORT);
        self.fb = self.view.render(snapshot, Viewport::new(w, h));
        if let Err(err) = self.renderer.draw_swap(&mut self.fb) {
            error!(error = %err, "frame flush failed");
        }
    }

    fn name(&self) -> &str {
        "terminal"
    }
}

impl Drop for TermGraphics {
    fn drop(&mut self) {
        // Best effort; the terminal may already be gone.
        let _ = self.renderer.exit();
    }
}
