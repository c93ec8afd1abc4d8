//! # Unified Number Parser
//!
//! Pairs the [`Normalizer`] with the [`Classifier`] and exposes the
//! process-wide default instance behind plain functions.

use std::sync::LazyLock;

use tracing::debug;

use crate::error::{BangoError, Result};
use crate::parser::classifier::Classifier;
use crate::parser::normalizer::Normalizer;
use crate::types::{NumberFamily, ParsedNumber};

/// Normalizes raw titles and classifies the resulting numbers.
pub struct NumberParser {
    normalizer: Normalizer,
    classifier: Classifier,
}

impl NumberParser {
    /// Create a new parser, compiling all rule tables.
    pub fn new() -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            classifier: Classifier::new()?,
        })
    }

    /// Extract the canonical number from a raw title or filename.
    pub fn trim(&self, raw: &str) -> String {
        self.normalizer.trim(raw)
    }

    /// Classify an already-normalized number.
    pub fn classify(&self, number: &str) -> NumberFamily {
        self.classifier.classify(number)
    }

    /// Normalize, then classify.
    ///
    /// # Examples
    /// ```
    /// use bango_core::parser::NumberParser;
    ///
    /// let parser = NumberParser::new().unwrap();
    /// let parsed = parser.parse("hhd800.com@FC2-PPV-1234567-C.mp4");
    ///
    /// assert_eq!(parsed.number, "FC2-1234567");
    /// assert!(parsed.is_fc2());
    /// assert!(parsed.requires_face_detection());
    /// ```
    pub fn parse(&self, raw: &str) -> ParsedNumber {
        let number = self.trim(raw);
        let family = self.classify(&number);
        debug!(raw, number = number.as_str(), %family, "parsed number");
        ParsedNumber::new(raw, number, family)
    }

    /// Like [`parse`](Self::parse), but refuses blank input and inputs that
    /// normalize to nothing.
    ///
    /// # Errors
    ///
    /// Returns `BangoError::EmptyInput` for blank input and
    /// `BangoError::Unrecognized` when no number is left after normalization.
    pub fn try_parse(&self, raw: &str) -> Result<ParsedNumber> {
        if raw.trim().is_empty() {
            return Err(BangoError::EmptyInput);
        }

        let parsed = self.parse(raw);
        if !parsed.has_number() {
            return Err(BangoError::Unrecognized {
                input: raw.to_string(),
            });
        }
        Ok(parsed)
    }

    pub fn is_fc2(&self, number: &str) -> bool {
        self.classifier.is_fc2(number)
    }

    pub fn is_uncensored(&self, number: &str) -> bool {
        self.classifier.is_uncensored(number)
    }

    pub fn is_special(&self, number: &str) -> bool {
        self.classifier.is_special(number)
    }

    pub fn require_face_detection(&self, number: &str) -> bool {
        self.classifier.require_face_detection(number)
    }
}

static DEFAULT_PARSER: LazyLock<NumberParser> =
    LazyLock::new(|| NumberParser::new().expect("built-in number patterns must compile"));

/// Shared parser backing the free functions in this module.
pub fn default_parser() -> &'static NumberParser {
    &DEFAULT_PARSER
}

/// Extract the canonical number from a raw title or filename.
///
/// ```
/// assert_eq!(bango_core::trim("[98t.tv]vema-181-4k-C.mp4"), "vema-181");
/// assert_eq!(bango_core::trim("020317-001-1pondo.mp4"), "020317-001");
/// ```
pub fn trim(raw: &str) -> String {
    DEFAULT_PARSER.trim(raw)
}

/// Classify a number into its family.
pub fn classify(number: &str) -> NumberFamily {
    DEFAULT_PARSER.classify(number)
}

/// Normalize and classify with the default parser.
pub fn parse(raw: &str) -> ParsedNumber {
    DEFAULT_PARSER.parse(raw)
}

/// Strict variant of [`parse`].
pub fn try_parse(raw: &str) -> Result<ParsedNumber> {
    DEFAULT_PARSER.try_parse(raw)
}

pub fn is_fc2(number: &str) -> bool {
    DEFAULT_PARSER.is_fc2(number)
}

pub fn is_uncensored(number: &str) -> bool {
    DEFAULT_PARSER.is_uncensored(number)
}

pub fn is_special(number: &str) -> bool {
    DEFAULT_PARSER.is_special(number)
}

pub fn require_face_detection(number: &str) -> bool {
    DEFAULT_PARSER.require_face_detection(number)
}
