//! # Password output widget
//!
//! One controller struct owns the whole interactive state: the live field,
//! the reveal and mode toggles, the generated output, the copy label, and
//! the transient notice.  Handlers are independent and stateless per
//! invocation; delayed reversions are deadlines expired by [`Widget::tick`].

use std::time::{Duration, Instant};

use crate::clipboard::Clipboard;
use crate::types::Passphrase;

pub const MAX_CHARS: usize = veilworks::MAX_CHARS;

/// Shown in place of an empty result so the output region never renders
/// blank.
pub const PLACEHOLDER: &str = "—";

const COPIED_REVERT: Duration = Duration::from_millis(1800);
const EMPTY_COPY_NOTICE: Duration = Duration::from_millis(2000);
const FAILED_COPY_NOTICE: Duration = Duration::from_millis(2500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
  SecureHash,
  Obfuscated,
}

impl Mode {
  pub fn flipped(self) -> Self {
    match self {
      Mode::SecureHash => Mode::Obfuscated,
      Mode::Obfuscated => Mode::SecureHash,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Mode::SecureHash => "hashed",
      Mode::Obfuscated => "obfuscated",
    }
  }
}

/// A generated preview together with the mode that produced it, so the
/// output region can say what it is showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
  pub text: String,
  pub mode: Mode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
  message: String,
  expires_at: Option<Instant>,
}

impl Notice {
  fn sticky(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      expires_at: None,
    }
  }

  fn transient(message: impl Into<String>, now: Instant, ttl: Duration) -> Self {
    Self {
      message: message.into(),
      expires_at: Some(now + ttl),
    }
  }

  pub fn message(&self) -> &str {
    &self.message
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyLabel {
  Copy,
  Copied { revert_at: Instant },
}

impl CopyLabel {
  pub fn text(self) -> &'static str {
    match self {
      CopyLabel::Copy => "Copy",
      CopyLabel::Copied { .. } => "Copied!",
    }
  }
}

pub struct Widget {
  field: String,
  revealed: bool,
  mode: Mode,
  output: Option<Output>,
  copy_label: CopyLabel,
  notice: Option<Notice>,
}

impl Widget {
  pub fn new() -> Self {
    Self {
      field: String::new(),
      revealed: false,
      mode: Mode::SecureHash,
      output: None,
      copy_label: CopyLabel::Copy,
      notice: None,
    }
  }

  pub fn field(&self) -> &str {
    &self.field
  }

  pub fn char_count(&self) -> usize {
    self.field.chars().count()
  }

  pub fn revealed(&self) -> bool {
    self.revealed
  }

  pub fn mode(&self) -> Mode {
    self.mode
  }

  pub fn output(&self) -> Option<&Output> {
    self.output.as_ref()
  }

  pub fn copy_label(&self) -> CopyLabel {
    self.copy_label
  }

  pub fn notice(&self) -> Option<&Notice> {
    self.notice.as_ref()
  }

  /// Appends a character to the field, up to the `MAX_CHARS` cap.  Any edit
  /// clears a visible notice, as the counter re-renders from the live value.
  pub fn insert(&mut self, ch: char) {
    if ch.is_control() || self.char_count() >= MAX_CHARS {
      return;
    }
    self.field.push(ch);
    self.notice = None;
  }

  pub fn backspace(&mut self) {
    self.field.pop();
    self.notice = None;
  }

  pub fn toggle_reveal(&mut self) {
    self.revealed = !self.revealed;
  }

  pub fn toggle_mode(&mut self) {
    self.mode = self.mode.flipped();
  }

  /// Validates the trimmed field value and renders it through the mode
  /// selected at this moment.  A rejected value hides the output region and
  /// leaves a sticky notice that the next edit clears.
  pub fn generate(&mut self) {
    let phrase = Passphrase::from(self.field.trim());
    if let Err(err) = veilworks::check_length(phrase.as_str()) {
      self.notice = Some(Notice::sticky(err.to_string()));
      self.output = None;
      return;
    }
    self.notice = None;
    self.output = None;
    self.copy_label = CopyLabel::Copy;
    let rendered = match self.mode {
      Mode::SecureHash => veilworks::digest_preview(phrase.as_str()),
      Mode::Obfuscated => veilworks::obfuscate(phrase.as_str()),
    };
    let text = if rendered.is_empty() {
      PLACEHOLDER.to_owned()
    } else {
      rendered
    };
    self.output = Some(Output {
      text,
      mode: self.mode,
    });
  }

  /// Writes the displayed output verbatim to the clipboard.  With nothing
  /// generated the clipboard is left untouched.
  pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
    let text = match &self.output {
      Some(output) if !output.text.is_empty() => output.text.clone(),
      _ => {
        self.notice =
          Some(Notice::transient("Nothing to copy.", now, EMPTY_COPY_NOTICE));
        return;
      }
    };
    match clipboard.copy(&text) {
      Ok(()) => {
        self.copy_label = CopyLabel::Copied {
          revert_at: now + COPIED_REVERT,
        };
      }
      Err(_) => {
        self.notice = Some(Notice::transient(
          "Copy failed — copy manually.",
          now,
          FAILED_COPY_NOTICE,
        ));
      }
    }
  }

  /// Expires due transient state.  Deadlines are one-shot; a superseding
  /// action overwrites the previous deadline and the last write wins.
  pub fn tick(&mut self, now: Instant) {
    if let CopyLabel::Copied { revert_at } = self.copy_label {
      if now >= revert_at {
        self.copy_label = CopyLabel::Copy;
      }
    }
    if let Some(notice) = &self.notice {
      if notice.expires_at.is_some_and(|at| now >= at) {
        self.notice = None;
      }
    }
  }

  /// The earliest pending deadline, if any; bounds the event-loop poll.
  pub fn next_deadline(&self) -> Option<Instant> {
    let revert = match self.copy_label {
      CopyLabel::Copied { revert_at } => Some(revert_at),
      CopyLabel::Copy => None,
    };
    let expiry = self.notice.as_ref().and_then(|notice| notice.expires_at);
    match (revert, expiry) {
      (Some(a), Some(b)) => Some(a.min(b)),
      (deadline, None) => deadline,
      (None, deadline) => deadline,
    }
  }
}
