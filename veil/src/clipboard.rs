use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("clipboard write failed: {0}")]
  Write(String),
  #[error("no clipboard integration on this platform")]
  Unsupported,
}

/// Where a copied preview goes.  The widget only sees this trait, so tests
/// can record or refuse writes.
pub trait Clipboard {
  fn copy(&mut self, text: &str) -> Result<(), Error>;
}

pub struct SystemClipboard;

impl SystemClipboard {
  pub fn new() -> Self {
    Self
  }
}

impl Clipboard for SystemClipboard {
  fn copy(&mut self, text: &str) -> Result<(), Error> {
    inner::copy(text)
  }
}

#[cfg(target_os = "linux")]
mod inner {
  use wl_clipboard_rs::copy::{MimeType, Options, Source};

  use super::Error;

  pub fn copy(text: &str) -> Result<(), Error> {
    let mut options = Options::new();
    options.trim_newline(true);
    options
      .copy(Source::Bytes(text.as_bytes().into()), MimeType::Text)
      .map_err(|err| Error::Write(err.to_string()))
  }
}

#[cfg(target_os = "macos")]
mod inner {
  use super::Error;

  pub fn copy(text: &str) -> Result<(), Error> {
    let mut clipboard =
      arboard::Clipboard::new().map_err(|err| Error::Write(err.to_string()))?;
    clipboard
      .set_text(text)
      .map_err(|err| Error::Write(err.to_string()))
  }
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
mod inner {
  use super::Error;

  pub fn copy(_text: &str) -> Result<(), Error> {
    Err(Error::Unsupported)
  }
}
