//! Terminal host for the rain engine.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use matrain_config::TerminalConfig;
use matrain_rain::{CellCanvas, Host, HostEvent};
use ratatui::DefaultTerminal;

/// Drives a [`CellCanvas`] sized to the terminal and feeds it crossterm events.
pub struct TerminalHost {
    terminal: DefaultTerminal,
    canvas: CellCanvas,
}

impl TerminalHost {
    pub fn new(terminal: DefaultTerminal, config: TerminalConfig) -> color_eyre::Result<Self> {
        let mut canvas = CellCanvas::new(config.cell_width, config.cell_height);
        let size = terminal.size()?;
        canvas.set_terminal_size(size.width, size.height);
        Ok(Self { terminal, canvas })
    }

    /// Map a crossterm event to a host event, if it is one we care about.
    fn on_event(&mut self, event: Event) -> Option<HostEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => on_key_event(key),
            Event::Resize(cols, rows) => {
                self.canvas.set_terminal_size(cols, rows);
                Some(HostEvent::Resized)
            }
            _ => None,
        }
    }
}

impl Host for TerminalHost {
    type Surface = CellCanvas;
    type Error = color_eyre::Report;

    fn surface(&mut self) -> &mut CellCanvas {
        &mut self.canvas
    }

    fn present(&mut self) -> color_eyre::Result<()> {
        let canvas = &self.canvas;
        self.terminal
            .draw(|frame| frame.render_widget(canvas, frame.area()))?;
        Ok(())
    }

    /// Poll crossterm until an interesting event arrives or `timeout` runs out.
    fn wait(&mut self, timeout: Duration) -> color_eyre::Result<Option<HostEvent>> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            if let Some(host_event) = self.on_event(event::read()?) {
                return Ok(Some(host_event));
            }
        }
    }
}

/// Quit on `q`, `Esc` or `Ctrl-C`; every other key is ignored.
fn on_key_event(key: KeyEvent) -> Option<HostEvent> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => {
            Some(HostEvent::Quit)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let quit = [
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ];
        for key in quit {
            assert_eq!(on_key_event(key), Some(HostEvent::Quit));
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(
            on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            on_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            None
        );
    }
}
