//! ISBN-10 / ISBN-13 validation.
//!
//! A raw value is first normalized by dropping everything that is not an
//! ASCII digit or an uppercase `X`, then classified by shape and checked
//! against the checksum of its format. Only uppercase `X` counts as the
//! ISBN-10 check character: a lowercase `x` is stripped during
//! normalization like any other separator, which leaves nine characters
//! and makes the value invalid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Why a value was rejected as an ISBN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IsbnError {
    #[error("ISBN must contain 13 digits, or 9 digits followed by a digit or 'X'")]
    InvalidFormat,

    #[error("ISBN checksum does not match")]
    ChecksumFailed,
}

/// Shape of a normalized candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsbnKind {
    Isbn10,
    Isbn13,
    Invalid,
}

/// Keep ASCII digits and uppercase `X`, drop everything else
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X')
        .collect()
}

pub fn classify(cleaned: &str) -> IsbnKind {
    let bytes = cleaned.as_bytes();
    match bytes.len() {
        13 if bytes.iter().all(u8::is_ascii_digit) => IsbnKind::Isbn13,
        10 if bytes[..9].iter().all(u8::is_ascii_digit)
            && (bytes[9].is_ascii_digit() || bytes[9] == b'X') =>
        {
            IsbnKind::Isbn10
        }
        _ => IsbnKind::Invalid,
    }
}

/// Weights alternate 1, 3, 1, ... ; the total must be a multiple of 10.
/// Expects 13 ASCII digits.
pub fn validate_isbn13(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 0 {
                digit
            } else {
                digit * 3
            }
        })
        .sum();
    sum % 10 == 0
}

/// Weights 10 down to 2 for the first nine digits, the check character
/// counts once (`X` = 10); the total must be a multiple of 11.
/// Expects 9 ASCII digits followed by a digit or `X`.
pub fn validate_isbn10(chars: &str) -> bool {
    let bytes = chars.as_bytes();
    let body: u32 = bytes[..9]
        .iter()
        .enumerate()
        .map(|(i, b)| (10 - i as u32) * u32::from(b - b'0'))
        .sum();
    let check = match bytes[9] {
        b'X' => 10,
        b => u32::from(b - b'0'),
    };
    (body + check) % 11 == 0
}

/// Full check of a raw value, reporting why it failed
pub fn check(raw: &str) -> Result<IsbnKind, IsbnError> {
    let cleaned = normalize(raw);
    let kind = classify(&cleaned);
    let valid = match kind {
        IsbnKind::Isbn13 => validate_isbn13(&cleaned),
        IsbnKind::Isbn10 => validate_isbn10(&cleaned),
        IsbnKind::Invalid => return Err(IsbnError::InvalidFormat),
    };
    if valid {
        Ok(kind)
    } else {
        Err(IsbnError::ChecksumFailed)
    }
}

pub fn verify(raw: &str) -> bool {
    check(raw).is_ok()
}

/// An ISBN that passed verification.
///
/// The value is kept exactly as supplied (hyphens and spaces included);
/// `normalized()` gives the bare digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn {
    raw: String,
    kind: IsbnKind,
}

impl Isbn {
    pub fn parse(raw: impl Into<String>) -> Result<Self, IsbnError> {
        let raw = raw.into();
        let kind = check(&raw)?;
        Ok(Self { raw, kind })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> IsbnKind {
        self.kind
    }

    pub fn normalized(&self) -> String {
        normalize(&self.raw)
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Isbn {
    type Error = IsbnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for Isbn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Isbn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Isbn::parse(raw).map_err(serde::de::Error::custom)
    }
}
