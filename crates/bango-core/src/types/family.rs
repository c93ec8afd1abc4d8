use std::fmt;

use serde::{Deserialize, Serialize};

/// Numbering family a content number belongs to.
///
/// Produced by a single classification pass. The boolean facts downstream
/// code cares about (`is_fc2`, `is_uncensored`, `is_special`,
/// `requires_face_detection`) are projections of this value, so
/// `is_fc2 || is_uncensored => is_special => requires_face_detection`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberFamily {
    /// FC2 pay-per-view: `FC2-123456`, `FC2PPV123456`.
    Fc2,
    /// Uncensored distribution with its own numbering convention.
    Uncensored(UncensoredKind),
    /// Personal or amateur collection storefront.
    Collection(CollectionSite),
    /// SIRO amateur series: `SIRO-030`.
    Siro,
    /// Numeric-prefixed amateur series: `133ARA-030`, `200GANA-1350`.
    Amateur,
    /// Standard studio code, or nothing recognizable.
    Unknown,
}

impl NumberFamily {
    /// Returns `true` for the FC2 family.
    #[must_use]
    pub fn is_fc2(self) -> bool {
        matches!(self, Self::Fc2)
    }

    /// Returns `true` for uncensored numbering conventions.
    #[must_use]
    pub fn is_uncensored(self) -> bool {
        matches!(self, Self::Uncensored(_))
    }

    /// Returns `true` when standard studio metadata is unlikely to apply.
    #[must_use]
    pub fn is_special(self) -> bool {
        match self {
            Self::Fc2 | Self::Uncensored(_) => true,
            Self::Collection(site) => site.is_special(),
            Self::Siro | Self::Amateur | Self::Unknown => false,
        }
    }

    /// Returns `true` when actors must be identified by face detection
    /// instead of metadata lookup.
    #[must_use]
    pub fn requires_face_detection(self) -> bool {
        self.is_special() || matches!(self, Self::Collection(_) | Self::Siro | Self::Amateur)
    }
}

impl fmt::Display for NumberFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fc2 => write!(f, "fc2"),
            Self::Uncensored(kind) => write!(f, "uncensored/{kind}"),
            Self::Collection(site) => write!(f, "collection/{site}"),
            Self::Siro => write!(f, "siro"),
            Self::Amateur => write!(f, "amateur"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Uncensored numbering conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UncensoredKind {
    /// Bare `<digits><sep><digits>`: Caribbean (`020317_001`), 1Pondo
    /// (`020317-001`), 10musume and friends.
    Numeric,
    /// `xxx-av-<digits>`
    XxxAv,
    /// `heydouga-<digits>-<digits>`
    Heydouga,
    /// `heyzo-<digits>`
    Heyzo,
    /// Tokyo-Hot `n<digits>`
    TokyoHot,
    /// `kb<digits>`
    Kb,
}

impl fmt::Display for UncensoredKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => write!(f, "numeric"),
            Self::XxxAv => write!(f, "xxx-av"),
            Self::Heydouga => write!(f, "heydouga"),
            Self::Heyzo => write!(f, "heyzo"),
            Self::TokyoHot => write!(f, "tokyo-hot"),
            Self::Kb => write!(f, "kb"),
        }
    }
}

/// Personal/amateur collection storefronts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionSite {
    Pcolle,
    Gcolle,
    Gyutto,
    Getchu,
    Orec,
}

impl CollectionSite {
    /// Number prefix used by the storefront, lowercase.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Pcolle => "pcolle",
            Self::Gcolle => "gcolle",
            Self::Gyutto => "gyutto",
            Self::Getchu => "getchu",
            Self::Orec => "orec",
        }
    }

    /// Looks a storefront up by its (case-insensitive) prefix.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        [
            Self::Pcolle,
            Self::Gcolle,
            Self::Gyutto,
            Self::Getchu,
            Self::Orec,
        ]
        .into_iter()
        .find(|site| site.prefix().eq_ignore_ascii_case(prefix))
    }

    /// Pcolle is an alternative-distribution channel in its own right; the
    /// other storefronts only lack reliable performer metadata.
    #[must_use]
    pub fn is_special(self) -> bool {
        matches!(self, Self::Pcolle)
    }
}

impl fmt::Display for CollectionSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [NumberFamily; 15] = [
        NumberFamily::Fc2,
        NumberFamily::Uncensored(UncensoredKind::Numeric),
        NumberFamily::Uncensored(UncensoredKind::XxxAv),
        NumberFamily::Uncensored(UncensoredKind::Heydouga),
        NumberFamily::Uncensored(UncensoredKind::Heyzo),
        NumberFamily::Uncensored(UncensoredKind::TokyoHot),
        NumberFamily::Uncensored(UncensoredKind::Kb),
        NumberFamily::Collection(CollectionSite::Pcolle),
        NumberFamily::Collection(CollectionSite::Gcolle),
        NumberFamily::Collection(CollectionSite::Gyutto),
        NumberFamily::Collection(CollectionSite::Getchu),
        NumberFamily::Collection(CollectionSite::Orec),
        NumberFamily::Siro,
        NumberFamily::Amateur,
        NumberFamily::Unknown,
    ];

    #[test]
    fn predicates_are_monotonic() {
        for family in ALL {
            if family.is_fc2() || family.is_uncensored() {
                assert!(family.is_special(), "{family} should be special");
            }
            if family.is_special() {
                assert!(
                    family.requires_face_detection(),
                    "{family} should require face detection"
                );
            }
        }
    }

    #[test]
    fn unknown_is_false_everywhere() {
        let f = NumberFamily::Unknown;
        assert!(!f.is_fc2());
        assert!(!f.is_uncensored());
        assert!(!f.is_special());
        assert!(!f.requires_face_detection());
    }

    #[test]
    fn face_detection_only_families() {
        for family in [
            NumberFamily::Siro,
            NumberFamily::Amateur,
            NumberFamily::Collection(CollectionSite::Orec),
            NumberFamily::Collection(CollectionSite::Gcolle),
        ] {
            assert!(!family.is_special(), "{family}");
            assert!(family.requires_face_detection(), "{family}");
        }
        assert!(NumberFamily::Collection(CollectionSite::Pcolle).is_special());
    }

    #[test]
    fn collection_prefix_lookup() {
        assert_eq!(CollectionSite::from_prefix("PCOLLE"), Some(CollectionSite::Pcolle));
        assert_eq!(CollectionSite::from_prefix("orec"), Some(CollectionSite::Orec));
        assert_eq!(CollectionSite::from_prefix("orecw"), None);
    }

    #[test]
    fn family_display() {
        assert_eq!(NumberFamily::Fc2.to_string(), "fc2");
        assert_eq!(
            NumberFamily::Uncensored(UncensoredKind::TokyoHot).to_string(),
            "uncensored/tokyo-hot"
        );
        assert_eq!(
            NumberFamily::Collection(CollectionSite::Getchu).to_string(),
            "collection/getchu"
        );
    }
}
