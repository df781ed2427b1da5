//! Pure transforms behind the veil widget: the length rule, the SHA-256
//! preview, and the reversible obfuscation with its degraded fallback.

use base64ct::Encoding;
use thiserror::Error;

/// Inclusive bounds on the accepted password length, counted in `char`s
/// after trimming.
pub const MIN_CHARS: usize = 8;
pub const MAX_CHARS: usize = 20;

/// Both output families are cut to this many characters for display.
pub const PREVIEW_CHARS: usize = 20;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("Password must be between {} and {} characters.", MIN_CHARS, MAX_CHARS)]
  LengthOutOfRange { chars: usize },
  #[error("base64 encoding failed")]
  EncodeFailed,
}

/// Accepts a trimmed password of `MIN_CHARS..=MAX_CHARS` characters.
///
/// The interactive field already caps input at `MAX_CHARS`, so the upper
/// bound only matters for text that arrives some other way.
pub fn check_length(text: &str) -> Result<(), Error> {
  let chars = text.chars().count();
  if (MIN_CHARS..=MAX_CHARS).contains(&chars) {
    Ok(())
  } else {
    Err(Error::LengthOutOfRange { chars })
  }
}

/// SHA-256 over the UTF-8 bytes, as lowercase hex, cut to `PREVIEW_CHARS`.
///
/// Nothing reversible happens after the hash; the preview stays one-way.
pub fn digest_preview(text: &str) -> String {
  let digest = hmac_sha256::Hash::hash(text.as_bytes());
  preview(&hex::encode(digest))
}

/// The primary obfuscation: base64 over the UTF-8 bytes, character sequence
/// reversed, cut to `PREVIEW_CHARS`. Reversible up to the truncation, and
/// in no way secure.
pub fn obfuscate_primary(text: &str) -> Result<String, Error> {
  let mut buf = vec![0u8; base64ct::Base64::encoded_len(text.as_bytes())];
  let encoded = base64ct::Base64::encode(text.as_bytes(), &mut buf)
    .map_err(|_| Error::EncodeFailed)?;
  Ok(encoded.chars().rev().take(PREVIEW_CHARS).collect())
}

/// The degraded transform used when the encoding layer fails: reverse the
/// raw characters and cut to `PREVIEW_CHARS`.
pub fn obfuscate_fallback(text: &str) -> String {
  text.chars().rev().take(PREVIEW_CHARS).collect()
}

pub fn obfuscate(text: &str) -> String {
  obfuscate_primary(text).unwrap_or_else(|_| obfuscate_fallback(text))
}

fn preview(text: &str) -> String {
  text.chars().take(PREVIEW_CHARS).collect()
}
