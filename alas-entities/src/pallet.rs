use std::{fmt, str::FromStr};
use thiserror::Error;

/// External identifier of a physical shipping unit.
///
/// The code is kept exactly as entered (case-preserving),
/// only surrounding whitespace is removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PalletCode(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Empty pallet code")]
pub struct EmptyPalletCode;

impl PalletCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PalletCode {
    type Err = EmptyPalletCode;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        if code.is_empty() {
            return Err(EmptyPalletCode);
        }
        Ok(Self(code.to_owned()))
    }
}

impl AsRef<str> for PalletCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PalletCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PalletCode> for String {
    fn from(from: PalletCode) -> Self {
        from.0
    }
}
