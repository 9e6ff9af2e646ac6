//! The national livestock identifier (NNI).
//!
//! An NNI is two ASCII letters (the country code) followed by exactly ten
//! digits. Input is accepted in any letter case; the stored form is always
//! upper case.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

static NNI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  // `\d` would admit non-ASCII digits.
  Regex::new(r"^[A-Z]{2}[0-9]{10}$").expect("NNI pattern is a valid regex")
});

/// A normalized, upper-case NNI.
#[derive(
  Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Nni(String);

impl Nni {
  /// Upper-case the ASCII letters of `raw` and check it against the NNI
  /// pattern.
  pub fn parse(raw: &str) -> Result<Self> {
    let upper = raw.to_ascii_uppercase();
    if NNI_PATTERN.is_match(&upper) {
      Ok(Self(upper))
    } else {
      Err(Error::InvalidNni(raw.to_string()))
    }
  }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Nni {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl FromStr for Nni {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl TryFrom<String> for Nni {
  type Error = Error;

  fn try_from(s: String) -> Result<Self> { Self::parse(&s) }
}

impl From<Nni> for String {
  fn from(nni: Nni) -> Self { nni.0 }
}

impl AsRef<str> for Nni {
  fn as_ref(&self) -> &str { &self.0 }
}
