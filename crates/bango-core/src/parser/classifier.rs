use regex::Regex;

use crate::error::Result;
use crate::types::{CollectionSite, NumberFamily, UncensoredKind};

/// Assigns a content number to its [`NumberFamily`].
///
/// Patterns are anchored against the whole identifier, so the classifier
/// expects a normalized number (or a raw string that already is one).
pub struct Classifier {
    re_fc2: Regex,
    uncensored: Vec<(UncensoredKind, Regex)>,
    re_collection: Regex,
    re_siro: Regex,
    re_amateur: Regex,
}

impl Classifier {
    /// Constructs a new `Classifier` with pre-compiled patterns.
    ///
    /// # Errors
    ///
    /// Returns `BangoError::RegexError` if any pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_fc2: Regex::new(r"(?i)^fc2(?:[-_]?ppv[-_]?[0-9]+|[-_][0-9]+|[0-9]{5,})$")?,
            uncensored: vec![
                (UncensoredKind::Numeric, Regex::new(r"^[0-9]+[-_][0-9]+$")?),
                (UncensoredKind::XxxAv, Regex::new(r"(?i)^xxx[-_]av[-_][0-9]+$")?),
                (
                    UncensoredKind::Heydouga,
                    Regex::new(r"(?i)^heydouga[-_][0-9]+[-_][0-9]+$")?,
                ),
                (UncensoredKind::Heyzo, Regex::new(r"(?i)^heyzo[-_][0-9]+$")?),
                (UncensoredKind::TokyoHot, Regex::new(r"(?i)^n[0-9]+$")?),
                (UncensoredKind::Kb, Regex::new(r"(?i)^kb[0-9]+$")?),
            ],
            // The prefix must not run on into another letter: `orecw-062` is
            // a different label from `orec-062`.
            re_collection: Regex::new(r"(?i)^(gcolle|pcolle|gyutto|getchu|orec)(?:$|[^A-Za-z])")?,
            re_siro: Regex::new(r"(?i)^siro(?:$|[^A-Za-z])")?,
            re_amateur: Regex::new(r"^[0-9]+[A-Za-z]+-[0-9]+$")?,
        })
    }

    /// Classifies a number in a single pass.
    pub fn classify(&self, number: &str) -> NumberFamily {
        if self.re_fc2.is_match(number) {
            return NumberFamily::Fc2;
        }

        if let Some((kind, _)) = self.uncensored.iter().find(|(_, re)| re.is_match(number)) {
            return NumberFamily::Uncensored(*kind);
        }

        if let Some(site) = self
            .re_collection
            .captures(number)
            .and_then(|caps| CollectionSite::from_prefix(&caps[1]))
        {
            return NumberFamily::Collection(site);
        }

        if self.re_siro.is_match(number) {
            NumberFamily::Siro
        } else if self.re_amateur.is_match(number) {
            NumberFamily::Amateur
        } else {
            NumberFamily::Unknown
        }
    }

    pub fn is_fc2(&self, number: &str) -> bool {
        self.classify(number).is_fc2()
    }

    pub fn is_uncensored(&self, number: &str) -> bool {
        self.classify(number).is_uncensored()
    }

    pub fn is_special(&self, number: &str) -> bool {
        self.classify(number).is_special()
    }

    pub fn require_face_detection(&self, number: &str) -> bool {
        self.classify(number).requires_face_detection()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new().unwrap()
    }

    #[test]
    fn is_uncensored() {
        let c = classifier();
        for (input, want) in [
            ("ABP-030", false),
            ("ssis00123", false),
            ("133ARA-030", false),
            ("123456_789", true),
            ("123456-789", true),
            ("123456-01", true),
            ("xxx-av-1789", true),
            ("xxx-av_1789", true),
            ("heydouga-1789-233", true),
            ("heydouga_1789-233", true),
            ("heyzo-1342", true),
            ("heyzo_1342", true),
            ("n1342", true),
            ("kb1342", true),
        ] {
            assert_eq!(c.is_uncensored(input), want, "input: {input}");
        }
    }

    #[test]
    fn is_fc2() {
        let c = classifier();
        for (input, want) in [
            ("FC2-738573", true),
            ("FC2_738573", true),
            ("FC2-PPV-738573", true),
            ("FC2PPV-738573", true),
            ("FC2PPV738573", true),
            ("fc2-ppv_738573", true),
            ("ABC-123", false),
            ("fc2996-123", false),
            ("fc2996", false),
            ("FC2-1234", true),
            ("fc212345", true),
        ] {
            assert_eq!(c.is_fc2(input), want, "input: {input}");
        }
    }

    #[test]
    fn is_special() {
        let c = classifier();
        for (input, want) in [
            ("ABP-133", false),
            ("FC2-738573", true),
            ("FC2_738573", true),
            ("133ARA-030", false),
            ("123456_789", true),
            ("123456-789", true),
            ("FC2-PPV-738573", true),
            ("xxx-av-1789", true),
            ("xxx-av_1789", true),
            ("heydouga-1789-233", true),
            ("heydouga_1789-233", true),
            ("heyzo-1342", true),
            ("heyzo_1342", true),
            ("pcolle-1332342", true),
            ("gcolle-847256", false),
            ("SIRO-030", false),
        ] {
            assert_eq!(c.is_special(input), want, "input: {input}");
        }
    }

    #[test]
    fn require_face_detection() {
        let c = classifier();
        for (input, want) in [
            ("ABP-030", false),
            ("ssis00123", false),
            ("SIRO-030", true),
            ("133ARA-030", true),
            ("FC2-738573", true),
            ("123456_789", true),
            ("123456-01", true),
            ("xxx-av-1789", true),
            ("heydouga-1789-233", true),
            ("heyzo-1342", true),
            ("n1342", true),
            ("kb1342", true),
            ("gcolle-847256", true),
            ("pcolle-14491760b933a35cfab", true),
            ("gyutto-254274", true),
            ("getchu-4041236", true),
            ("orec-062", true),
            ("orec062", true),
            ("orecw-062", false),
            ("LAFBD-41", false),
            ("PRED-314", false),
        ] {
            assert_eq!(c.require_face_detection(input), want, "input: {input}");
        }
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        let c = classifier();
        for input in ["１２３４５６-７８９", "n１２３４", "FC2-１２３４５６", "１３３ARA-０３０"] {
            assert_eq!(c.classify(input), NumberFamily::Unknown, "input: {input}");
        }
    }

    #[test]
    fn classify_families() {
        let c = classifier();
        assert_eq!(c.classify("FC2-123456"), NumberFamily::Fc2);
        assert_eq!(
            c.classify("020317_001"),
            NumberFamily::Uncensored(UncensoredKind::Numeric)
        );
        assert_eq!(
            c.classify("heydouga-4102-023"),
            NumberFamily::Uncensored(UncensoredKind::Heydouga)
        );
        assert_eq!(
            c.classify("n9001"),
            NumberFamily::Uncensored(UncensoredKind::TokyoHot)
        );
        assert_eq!(
            c.classify("GETCHU-4041236"),
            NumberFamily::Collection(CollectionSite::Getchu)
        );
        assert_eq!(c.classify("siro-5123"), NumberFamily::Siro);
        assert_eq!(c.classify("200GANA-1350"), NumberFamily::Amateur);
        assert_eq!(c.classify("ABP-030"), NumberFamily::Unknown);
        assert_eq!(c.classify(""), NumberFamily::Unknown);
    }
}
