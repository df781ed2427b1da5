use std::fmt;

#[derive(Clone)]
#[repr(transparent)]
/// A password entered by the user.  Never spill this; only the derived
/// previews leave the widget.
pub struct Passphrase(Box<str>);

impl Passphrase {
  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn char_count(&self) -> usize {
    self.0.chars().count()
  }
}

impl<T> From<T> for Passphrase
where
  T: Into<Box<str>>,
{
  fn from(value: T) -> Self {
    Self(value.into())
  }
}

// Redacted so the text cannot leak through a debug trace or a panic
// message.
impl fmt::Debug for Passphrase {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Passphrase(<{} chars>)", self.char_count())
  }
}
