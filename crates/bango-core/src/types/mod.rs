pub mod family;
pub mod result;

pub use family::{CollectionSite, NumberFamily, UncensoredKind};
pub use result::ParsedNumber;
