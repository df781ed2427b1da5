mod clipboard;
mod types;
mod view;
mod widget;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::view::Screen;
use crate::widget::Widget;

/// Poll granularity while nothing is pending; a due reversion shortens it.
const IDLE_POLL: Duration = Duration::from_millis(250);

enum Flow {
  Continue,
  Quit,
}

struct RawMode;

impl RawMode {
  fn enable() -> Result<Self> {
    terminal::enable_raw_mode()?;
    Ok(Self)
  }
}

impl Drop for RawMode {
  fn drop(&mut self) {
    let _ = terminal::disable_raw_mode();
  }
}

fn show_notice() {
  println!("Veil, version {}", env!("CARGO_PKG_VERSION"));
  println!("Type a password, press enter for a preview you can share.");
}

fn handle_key(
  key: KeyEvent,
  widget: &mut Widget,
  clipboard: &mut dyn Clipboard,
) -> Flow {
  match key.code {
    KeyCode::Esc => return Flow::Quit,
    KeyCode::Enter => widget.generate(),
    KeyCode::Tab => widget.toggle_mode(),
    KeyCode::Backspace => widget.backspace(),
    KeyCode::Char(ch) if key.modifiers.contains(KeyModifiers::CONTROL) => {
      match ch {
        'c' => return Flow::Quit,
        'r' => widget.toggle_reveal(),
        't' => widget.toggle_mode(),
        'y' => widget.copy(clipboard, Instant::now()),
        _ => {}
      }
    }
    KeyCode::Char(ch) => widget.insert(ch),
    _ => {}
  }
  Flow::Continue
}

fn run(widget: &mut Widget, clipboard: &mut dyn Clipboard) -> Result<()> {
  let _raw = RawMode::enable()?;
  let mut screen = Screen::new(io::stdout());
  loop {
    screen.draw(widget)?;
    let timeout = widget
      .next_deadline()
      .map(|at| at.saturating_duration_since(Instant::now()))
      .unwrap_or(IDLE_POLL);
    if event::poll(timeout)? {
      if let Event::Key(key) = event::read()? {
        if key.kind == KeyEventKind::Press {
          if let Flow::Quit = handle_key(key, widget, clipboard) {
            break;
          }
        }
      }
    }
    widget.tick(Instant::now());
  }
  screen.finish()?;
  Ok(())
}

fn main() -> Result<()> {
  show_notice();
  let mut widget = Widget::new();
  let mut clipboard = SystemClipboard::new();
  run(&mut widget, &mut clipboard)
}
