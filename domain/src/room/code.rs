//! Room join code value object

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Alphabet for room codes: uppercase letters plus digits, minus the
/// visually ambiguous `O` and `0`.
pub const CODE_ALPHABET: &str = "ABCDEFGHIJKLMNPQRSTUVWXYZ123456789";

/// Length of every room code.
pub const CODE_LENGTH: usize = 6;

/// A six-character room join code (Value Object)
///
/// Codes are generated by uniform independent draws from [`CODE_ALPHABET`]
/// and compared case-insensitively: participants type them by hand, so
/// parsing trims whitespace and uppercases before validating.
///
/// # Example
///
/// ```
/// use agora_domain::room::code::RoomCode;
///
/// let code = RoomCode::try_parse(" xk4q2m ").unwrap();
/// assert_eq!(code.as_str(), "XK4Q2M");
/// assert!(RoomCode::try_parse("O00000").is_none()); // ambiguous glyphs excluded
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomCode(String);

impl RoomCode {
    /// Draw a fresh code from the given random source.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let alphabet = CODE_ALPHABET.as_bytes();
        let code = (0..CODE_LENGTH)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())] as char)
            .collect();
        Self(code)
    }

    /// Draw a fresh code from the process-wide random source.
    pub fn random() -> Self {
        Self::generate(&mut rand::rng())
    }

    /// Parse user input into a code, returning `None` if invalid.
    ///
    /// Trims surrounding whitespace and uppercases before validating
    /// length and alphabet membership.
    pub fn try_parse(input: &str) -> Option<Self> {
        let code = input.trim().to_ascii_uppercase();
        if code.len() != CODE_LENGTH || !code.chars().all(|c| CODE_ALPHABET.contains(c)) {
            return None;
        }
        Some(Self(code))
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RoomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RoomCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoomCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RoomCode::try_parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid room code: {s:?}")))
    }
}
