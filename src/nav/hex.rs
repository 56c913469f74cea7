//! Eight-digit hexadecimal friend codes
//!
//! A [`HexCode`] is always fully populated: eight digits, each drawn from
//! [`HEX_ALPHABET`]. Parsing accepts loosely formatted input (lowercase,
//! whitespace, `-` separators) and normalizes it before validating.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of digits in a friend code
pub const CODE_LEN: usize = 8;

/// The 16 symbols a digit may take, in cycling order
pub const HEX_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Why a string could not be turned into a [`HexCode`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexCodeError {
    #[error("expected 8 hex digits, found {len}")]
    WrongLength { len: usize },

    #[error("'{ch}' at position {position} is not a hex digit")]
    InvalidDigit { ch: char, position: usize },
}

/// A validated friend code.
///
/// Digits are stored as values in `0..16`, so the type cannot hold a
/// partially filled or out-of-alphabet code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCode([u8; CODE_LEN]);

impl HexCode {
    /// `00000000`, the starting point for manual entry
    pub const ZERO: HexCode = HexCode([0; CODE_LEN]);

    /// Clean and validate user-supplied text.
    ///
    /// Whitespace and `-` are stripped, letters are uppercased, and what
    /// remains must be exactly [`CODE_LEN`] hex digits.
    pub fn parse(input: &str) -> Result<Self, HexCodeError> {
        let cleaned: Vec<char> = input
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if cleaned.len() != CODE_LEN {
            return Err(HexCodeError::WrongLength { len: cleaned.len() });
        }

        let mut digits = [0u8; CODE_LEN];
        for (position, ch) in cleaned.into_iter().enumerate() {
            digits[position] =
                digit_value(ch).ok_or(HexCodeError::InvalidDigit { ch, position })?;
        }
        Ok(HexCode(digits))
    }

    /// Character at `position` (`0..CODE_LEN`)
    pub fn digit(&self, position: usize) -> Option<char> {
        self.0
            .get(position)
            .map(|value| HEX_ALPHABET[usize::from(*value)])
    }

    /// Copy of this code with the digit at `position` stepped by `delta`
    /// through the alphabet, wrapping in both directions.
    pub fn cycled(self, position: usize, delta: i8) -> Self {
        let mut digits = self.0;
        if let Some(value) = digits.get_mut(position) {
            let len = HEX_ALPHABET.len() as i16;
            *value = (i16::from(*value) + i16::from(delta)).rem_euclid(len) as u8;
        }
        HexCode(digits)
    }
}

impl Default for HexCode {
    fn default() -> Self {
        HexCode::ZERO
    }
}

fn digit_value(ch: char) -> Option<u8> {
    HEX_ALPHABET
        .iter()
        .position(|candidate| *candidate == ch)
        .map(|index| index as u8)
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{}", HEX_ALPHABET[usize::from(value)])?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexCode({})", self)
    }
}

impl FromStr for HexCode {
    type Err = HexCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexCode::parse(s)
    }
}

impl Serialize for HexCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        HexCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}
