//! # Bango Core
//!
//! Extracts the canonical content number ("品番") from noisy release titles
//! and filenames, and classifies it into the families downstream metadata
//! lookup depends on.
//!
//! ## Quick Start
//!
//! ```rust
//! use bango_core::{is_special, require_face_detection, trim};
//!
//! let number = trim("hhd800.com@MIDV-111-C_X1080X.mp4");
//! assert_eq!(number, "MIDV-111");
//! assert!(!is_special(&number));
//!
//! assert_eq!(trim("FC2_PPV_123456"), "FC2-123456");
//! assert!(require_face_detection("133ARA-030"));
//! ```
pub mod error;
pub mod parser;
pub mod types;

// Re-export primary API
pub use error::{BangoError, Result};
pub use parser::{
    Classifier, Normalizer, NumberParser, classify, is_fc2, is_special, is_uncensored, parse,
    require_face_detection, trim, try_parse,
};
pub use types::{CollectionSite, NumberFamily, ParsedNumber, UncensoredKind};
