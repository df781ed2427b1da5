//! # Inline rendering
//!
//! Line content is built by plain functions so the rendered text can be
//! checked without a terminal; [`Screen`] only adds color and repaints the
//! block in place.

use std::io::{self, Write};

use crossterm::{
  cursor, queue,
  style::{Print, PrintStyledContent, Stylize},
  terminal::{self, ClearType},
};

use crate::widget::{CopyLabel, Mode, Output, Widget, MAX_CHARS};

pub const MASK: char = '•';

/// Row of the field line within the drawn block; the cursor parks there at
/// the end of the entered text.
const FIELD_ROW: u16 = 1;

pub fn counter(widget: &Widget) -> String {
  format!("({}/{})", widget.char_count(), MAX_CHARS)
}

pub fn field_text(widget: &Widget) -> String {
  if widget.revealed() {
    widget.field().to_owned()
  } else {
    MASK.to_string().repeat(widget.char_count())
  }
}

pub fn mode_line(widget: &Widget) -> String {
  let tick = match widget.mode() {
    Mode::SecureHash => 'x',
    Mode::Obfuscated => ' ',
  };
  format!("[{}] secure hash (recommended)", tick)
}

pub fn output_label(output: &Output) -> String {
  format!("Output ({}):", output.mode.label())
}

pub fn copy_hint(label: CopyLabel) -> String {
  format!("[ctrl+y: {}]", label.text())
}

pub fn hint_line(widget: &Widget) -> String {
  let reveal = if widget.revealed() { "hide" } else { "show" };
  format!("enter generate · tab mode · ctrl+r {} · ctrl+y copy · esc quit", reveal)
}

pub struct Screen<W: Write> {
  out: W,
  park_row: Option<u16>,
  last_lines: u16,
}

impl<W: Write> Screen<W> {
  pub fn new(out: W) -> Self {
    Self {
      out,
      park_row: None,
      last_lines: 0,
    }
  }

  /// Repaints the whole block and parks the cursor at the end of the field.
  pub fn draw(&mut self, widget: &Widget) -> io::Result<()> {
    if let Some(row) = self.park_row {
      if row > 0 {
        queue!(self.out, cursor::MoveUp(row))?;
      }
    }
    queue!(
      self.out,
      cursor::MoveToColumn(0),
      terminal::Clear(ClearType::FromCursorDown)
    )?;

    let mut lines: u16 = 0;

    queue!(
      self.out,
      PrintStyledContent("Password?".yellow()),
      Print(" "),
      PrintStyledContent(counter(widget).dim()),
      Print("\r\n")
    )?;
    lines += 1;

    queue!(
      self.out,
      Print("> "),
      Print(field_text(widget)),
      Print("\r\n")
    )?;
    lines += 1;

    queue!(self.out, Print(mode_line(widget)), Print("\r\n"))?;
    lines += 1;

    if let Some(output) = widget.output() {
      queue!(
        self.out,
        PrintStyledContent(output_label(output).green()),
        Print(" "),
        PrintStyledContent(output.text.clone().bold()),
        Print("  "),
        PrintStyledContent(copy_hint(widget.copy_label()).dim()),
        Print("\r\n")
      )?;
      lines += 1;
    }

    if let Some(notice) = widget.notice() {
      queue!(
        self.out,
        PrintStyledContent("Error: ".red()),
        Print(notice.message().to_owned()),
        Print("\r\n")
      )?;
      lines += 1;
    }

    queue!(self.out, PrintStyledContent(hint_line(widget).dim()), Print("\r\n"))?;
    lines += 1;

    // Park the cursor after the entered text, caret-at-end style.  Failing
    // to place it is cosmetic only.
    let column = (2 + widget.char_count()) as u16;
    let _ = queue!(
      self.out,
      cursor::MoveUp(lines - FIELD_ROW),
      cursor::MoveToColumn(column)
    );
    self.park_row = Some(FIELD_ROW);
    self.last_lines = lines;
    self.out.flush()
  }

  /// Steps below the block so the shell prompt lands on a fresh line.
  pub fn finish(&mut self) -> io::Result<()> {
    if let Some(row) = self.park_row {
      let below = self.last_lines.saturating_sub(row + 1);
      if below > 0 {
        queue!(self.out, cursor::MoveDown(below))?;
      }
      queue!(self.out, cursor::MoveToColumn(0), Print("\r\n"))?;
    }
    self.out.flush()
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::widget::Widget;

  fn typed(text: &str) -> Widget {
    let mut widget = Widget::new();
    for ch in text.chars() {
      widget.insert(ch);
    }
    widget
  }

  #[test]
  fn counter_tracks_the_live_value() {
    assert_eq!(counter(&Widget::new()), "(0/20)");
    assert_eq!(counter(&typed("password1")), "(9/20)");
  }

  #[test]
  fn field_is_masked_until_revealed() {
    let mut widget = typed("password1");
    assert_eq!(field_text(&widget), "•••••••••");
    widget.toggle_reveal();
    assert_eq!(field_text(&widget), "password1");
  }

  #[test]
  fn mode_line_shows_the_checkbox_state() {
    let mut widget = Widget::new();
    assert_eq!(mode_line(&widget), "[x] secure hash (recommended)");
    widget.toggle_mode();
    assert_eq!(mode_line(&widget), "[ ] secure hash (recommended)");
  }

  #[test]
  fn output_label_names_the_producing_mode() {
    let mut widget = typed("password1");
    widget.generate();
    assert_eq!(output_label(widget.output().unwrap()), "Output (hashed):");
    widget.toggle_mode();
    widget.generate();
    assert_eq!(output_label(widget.output().unwrap()), "Output (obfuscated):");
  }

  #[test]
  fn copy_hint_follows_the_label() {
    assert_eq!(copy_hint(CopyLabel::Copy), "[ctrl+y: Copy]");
  }

  #[test]
  fn hint_line_flips_with_the_reveal_toggle() {
    let mut widget = Widget::new();
    assert!(hint_line(&widget).contains("ctrl+r show"));
    widget.toggle_reveal();
    assert!(hint_line(&widget).contains("ctrl+r hide"));
  }

  #[test]
  fn draw_renders_every_visible_region() {
    let mut widget = typed("short");
    widget.generate();
    let mut buf: Vec<u8> = Vec::new();
    {
      let mut screen = Screen::new(&mut buf);
      screen.draw(&widget).unwrap();
    }
    let painted = String::from_utf8_lossy(&buf);
    assert!(painted.contains("Password?"));
    assert!(painted.contains("(5/20)"));
    assert!(painted.contains("Password must be between 8 and 20 characters."));
  }
}
