use serde::{Deserialize, Serialize};

use super::family::NumberFamily;

/// The output of a full parse: the canonical number extracted from a raw
/// title or filename, and the family it was classified into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedNumber {
    /// Original input string.
    pub input: String,

    /// Canonical number (e.g., "ABP-030", "FC2-123456"). Empty when nothing
    /// recognizable was found.
    pub number: String,

    /// Numbering family of `number`.
    pub family: NumberFamily,
}

impl ParsedNumber {
    /// Creates a new `ParsedNumber`.
    #[must_use]
    pub fn new(input: impl Into<String>, number: impl Into<String>, family: NumberFamily) -> Self {
        Self {
            input: input.into(),
            number: number.into(),
            family,
        }
    }

    /// Returns `true` if a non-empty number was extracted.
    #[must_use]
    pub fn has_number(&self) -> bool {
        !self.number.is_empty()
    }

    #[must_use]
    pub fn is_fc2(&self) -> bool {
        self.family.is_fc2()
    }

    #[must_use]
    pub fn is_uncensored(&self) -> bool {
        self.family.is_uncensored()
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.family.is_special()
    }

    #[must_use]
    pub fn requires_face_detection(&self) -> bool {
        self.family.requires_face_detection()
    }
}

impl std::fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ParsedNumber(number={:?}, family={})", self.number, self.family)
    }
}
