use std::borrow::Cow;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::error::Result;

/// Rewrites applied to the raw input before any number is looked for.
///
/// The whole sequence is re-run until the text stops changing, so a rewrite
/// that exposes new noise (an unwrapped tag group revealing an extension, a
/// nested bracket) is handled on the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleaningStage {
    /// `uploader@site@TITLE` → `TITLE`
    Credits,
    /// Unwraps identifier-shaped `[...]`/`(...)`/`【...】`/`{...}` groups,
    /// drops all others.
    TagGroups,
    /// Drops site names that never belong to a number (`Tokyo Hot`).
    SiteNames,
    /// Drops trailing punctuation and known video/disc-image extensions.
    Extension,
}

/// Recognizers tried in order over the cleaned text. The first hit is the
/// number; nothing after it is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognitionStage {
    /// `FC2-PPV-123456`, `FC2PPV_123456`, `fc2-123456-1` → `FC2-123456`
    Fc2,
    /// `heydouga-4102-023`, `xxx-av-1789`, `heyzo-1342`, kept verbatim.
    NamedUncensored,
    /// `<digits>[-_]<digits>` releases (Caribbean, 1Pondo, 10musume, ...).
    SiteNumbering,
    /// `ABP-030`, `MARRA-A030`, `133ARA-030`.
    StudioCode,
    /// Dash-less codes: `ssis00123`, `n9110`, `h_346rebd655tk2`.
    CompactCode,
}

/// Cleaning stages in application order.
pub const CLEANING_STAGES: [CleaningStage; 4] = [
    CleaningStage::Credits,
    CleaningStage::TagGroups,
    CleaningStage::SiteNames,
    CleaningStage::Extension,
];

/// Recognition stages in priority order.
pub const RECOGNITION_STAGES: [RecognitionStage; 5] = [
    RecognitionStage::Fc2,
    RecognitionStage::NamedUncensored,
    RecognitionStage::SiteNumbering,
    RecognitionStage::StudioCode,
    RecognitionStage::CompactCode,
];

/// Relation of a `<digits>-<digits>` core to its neighbouring words.
enum SiteAnchor {
    /// Next to a distributor name.
    Distributor,
    /// No word, a numeric word or a quality marker glued on.
    Bare,
    /// Glued to some other word (`abc-123456-78`).
    Foreign,
}

/// Extracts the canonical content number from noisy titles and filenames.
///
/// Total over all inputs: anything without a recognizable number comes back
/// with only its surrounding punctuation removed, and `""` maps to `""`.
/// `trim` is idempotent.
pub struct Normalizer {
    re_credit: Regex,
    re_tag_group: Regex,
    re_site_name: Regex,
    re_extension: Regex,
    re_tag_content: Regex,
    re_domain: Regex,
    re_noise: Regex,
    re_fc2: Regex,
    re_named_uncensored: Regex,
    re_site_numbering: Regex,
    re_date_tail: Regex,
    re_distributor: Regex,
    re_studio_code: Regex,
    re_word: Regex,
    re_compact_code: Regex,
}

impl Normalizer {
    /// Constructs a new `Normalizer` with pre-compiled rule tables.
    ///
    /// # Errors
    ///
    /// Returns `BangoError::RegexError` if any pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_credit: Regex::new(r"(?s)^.*@")?,
            re_tag_group: Regex::new(r"[\[(【{]([^\[\]()【】{}]*)[\])】}]")?,
            re_site_name: Regex::new(r"(?i)tokyo[-_\s]?hot")?,
            re_extension: Regex::new(
                r"(?i)\.(?:mp4|mkv|avi|iso|mov|wmv|rmvb|rm|flv|ts|m2ts|mts|mpg|mpeg|m4v|webm|3gp|f4v|vob|asf|divx|strm)$",
            )?,
            re_tag_content: Regex::new(r"^[A-Za-z0-9]+(?:[-_.][A-Za-z0-9]+)*$")?,
            re_domain: Regex::new(r"(?i)^(?:[a-z0-9-]+\.)+([a-z]{2,4})$")?,
            re_noise: Regex::new(
                r"(?i)^(?:(?:[0-9]{3,4}[pi]|[1-8]k|[0-9]{2,3}fps|x[0-9]{3,4}x?|[xh]\.?26[45]|hevc|avc|[uf]?hd[0-9]?|sd[0-9]?|hhbhd|avi|mp4|mkv|wmv|dvd|uncensored|leak|whole|ch|cd[0-9]{1,2}|c)[-_.]?)+$",
            )?,
            // A marker glued straight to the digits needs five of them, so
            // `fc2996-123` stays a plain code.
            re_fc2: Regex::new(
                r"(?i)(?:^|[^A-Za-z0-9])fc2(?:[-_]?ppv[-_]?([0-9]+)|[-_]([0-9]+)|([0-9]{5,}))",
            )?,
            re_named_uncensored: Regex::new(
                r"(?i)(?:^|[^A-Za-z0-9])(heydouga[-_][0-9]+[-_][0-9]+|xxx[-_]av[-_][0-9]+|heyzo[-_][0-9]+)",
            )?,
            re_site_numbering: Regex::new(r"(?:^|[^A-Za-z0-9])([0-9]{4,8}[-_][0-9]{2,4})")?,
            re_date_tail: Regex::new(r"^[-_.][0-9]+(?:$|[^A-Za-z0-9])")?,
            re_distributor: Regex::new(
                r"(?i)^(?:carib(?:b?ean)?(?:com)?|1?pondo?|10musume|musume|pacopacomama|paco|muramura|com)$",
            )?,
            re_studio_code: Regex::new(
                r"(?:^|[^A-Za-z0-9])(([0-9]*[A-Za-z]+)-[A-Za-z]?[0-9]+)",
            )?,
            re_word: Regex::new(r"[A-Za-z0-9_]+")?,
            re_compact_code: Regex::new(
                r"^((?:[0-9]*[A-Za-z]+_)?[0-9]*[A-Za-z]+[0-9]+(?:[A-Za-z]+[0-9]+)*)(?:_[A-Za-z0-9]+)*[A-Za-z]*$",
            )?,
        })
    }

    /// Normalizes a raw title or filename to its canonical number.
    pub fn trim(&self, input: &str) -> String {
        let cleaned = self.clean(input);

        for stage in RECOGNITION_STAGES {
            if let Some(number) = self.recognize(stage, &cleaned) {
                debug!(?stage, input, number = number.as_str(), "recognized number");
                return number;
            }
        }

        let fallback = cleaned
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_string();
        debug!(input, number = fallback.as_str(), "no number pattern, using fallback");
        fallback
    }

    /// Runs every cleaning stage until the text reaches a fixpoint.
    pub fn clean(&self, input: &str) -> String {
        let mut current = input.to_string();
        loop {
            let mut next = current.clone();
            for stage in CLEANING_STAGES {
                next = self.apply(stage, &next);
            }
            trace!(before = current.as_str(), after = next.as_str(), "cleaning pass");
            if next == current {
                return next;
            }
            current = next;
        }
    }

    /// Applies a single cleaning stage.
    pub fn apply(&self, stage: CleaningStage, text: &str) -> String {
        match stage {
            CleaningStage::Credits => self.re_credit.replace(text, "").into_owned(),
            CleaningStage::TagGroups => self.strip_tag_groups(text),
            CleaningStage::SiteNames => self.re_site_name.replace_all(text, " ").into_owned(),
            CleaningStage::Extension => self.strip_extension(text).to_string(),
        }
    }

    /// Resolves groups innermost-first so `[x[HND-620]y]` is fully consumed
    /// before the extension stage gets to trim a dangling bracket.
    fn strip_tag_groups(&self, text: &str) -> String {
        let mut current = text.to_string();
        loop {
            let replaced = self.re_tag_group.replace_all(&current, |caps: &Captures| {
                let inner = caps[1].trim();
                if self.is_tag_identifier(inner) {
                    format!(" {inner} ")
                } else {
                    " ".to_string()
                }
            });
            match replaced {
                Cow::Borrowed(_) => return current,
                Cow::Owned(next) => current = next,
            }
        }
    }

    /// Runs a single recognizer over already-cleaned text.
    pub fn recognize(&self, stage: RecognitionStage, text: &str) -> Option<String> {
        match stage {
            RecognitionStage::Fc2 => self
                .re_fc2
                .captures(text)
                .and_then(|caps| caps.get(1).or(caps.get(2)).or(caps.get(3)))
                .map(|digits| format!("FC2-{}", digits.as_str())),
            RecognitionStage::NamedUncensored => self
                .re_named_uncensored
                .captures(text)
                .map(|caps| caps[1].to_string()),
            RecognitionStage::SiteNumbering => self.find_site_numbering(text),
            RecognitionStage::StudioCode => self.find_studio_code(text),
            RecognitionStage::CompactCode => self.find_compact_code(text),
        }
    }

    fn strip_extension<'a>(&self, mut text: &'a str) -> &'a str {
        loop {
            text = text.trim_end_matches(|c: char| !c.is_alphanumeric());
            match self.re_extension.find(text) {
                Some(m) => text = &text[..m.start()],
                None => return text,
            }
        }
    }

    fn is_noise(&self, token: &str) -> bool {
        self.re_noise.is_match(token)
    }

    /// Domain-shaped tokens (`98t.tv`, `ThZu.Cc`) never hold a number.
    fn is_domain(&self, token: &str) -> bool {
        self.re_domain
            .captures(token)
            .is_some_and(|caps| !self.is_noise(&caps[1]))
    }

    fn is_tag_identifier(&self, inner: &str) -> bool {
        self.re_tag_content.is_match(inner)
            && inner.bytes().any(|b| b.is_ascii_digit())
            && !self.is_domain(inner)
            && !self.is_noise(inner)
    }

    /// `true` when `rest` opens with a top-level-domain suffix such as
    /// `.tv` or `.com`. Noise such as `.HD` is not a domain.
    fn starts_with_domain_suffix(&self, rest: &str) -> bool {
        let Some(after_dot) = rest.strip_prefix('.') else {
            return false;
        };
        let len = after_dot
            .bytes()
            .take_while(u8::is_ascii_alphabetic)
            .count();
        let closed = after_dot[len..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_ascii_alphanumeric());
        (2..=4).contains(&len) && closed && !self.is_noise(&after_dot[..len])
    }

    /// A numeric core tied to a distributor name wins outright. A bare one
    /// only counts when the text holds no studio code.
    fn find_site_numbering(&self, text: &str) -> Option<String> {
        let mut bare = None;
        for caps in self.re_site_numbering.captures_iter(text) {
            let Some(core) = caps.get(1) else {
                continue;
            };
            let rest = &text[core.end()..];

            if rest.starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            // 2021-08-01 style calendar dates
            if self.re_date_tail.is_match(rest) {
                continue;
            }
            match self.site_anchor(&text[..core.start()], rest) {
                SiteAnchor::Distributor => return Some(core.as_str().to_string()),
                SiteAnchor::Bare => {
                    bare.get_or_insert(core);
                }
                SiteAnchor::Foreign => {}
            }
        }

        let core = bare?;
        if let Some(code) = self.find_studio_code(text) {
            trace!(
                candidate = core.as_str(),
                studio = code.as_str(),
                "studio code outranks bare site number"
            );
            return None;
        }
        Some(core.as_str().to_string())
    }

    /// Looks at the words on either side of a numeric core
    /// (`carib-020317_001`, `020317-001-1pondo`, `Carib 080520-001`).
    fn site_anchor(&self, before: &str, rest: &str) -> SiteAnchor {
        let next = rest.trim_start_matches(['-', '_', ' ']);
        let next = &next[..next
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(next.len())];
        if self.re_distributor.is_match(next) {
            return SiteAnchor::Distributor;
        }

        let glued = before.strip_suffix(['-', '_']);
        let prev_text = glued.unwrap_or(before).trim_end();
        let start = prev_text
            .rfind(|c: char| !c.is_ascii_alphanumeric())
            .map_or(0, |i| i + prev_text[i..].chars().next().map_or(1, char::len_utf8));
        let prev = &prev_text[start..];

        if self.re_distributor.is_match(prev) {
            SiteAnchor::Distributor
        } else if glued.is_some()
            && prev.bytes().any(|b| b.is_ascii_alphabetic())
            && !self.is_noise(prev)
        {
            SiteAnchor::Foreign
        } else {
            SiteAnchor::Bare
        }
    }

    fn find_studio_code(&self, text: &str) -> Option<String> {
        self.re_studio_code
            .captures_iter(text)
            .filter_map(|caps| {
                let code = caps.get(1)?;
                let prefix = caps.get(2)?.as_str();
                if self.is_noise(prefix) || self.starts_with_domain_suffix(&text[code.end()..]) {
                    trace!(candidate = code.as_str(), "skipping studio code candidate");
                    return None;
                }
                Some(code.as_str().to_string())
            })
            .next()
    }

    fn find_compact_code(&self, text: &str) -> Option<String> {
        self.re_word
            .find_iter(text)
            .filter_map(|m| {
                let word = m.as_str().trim_matches('_');
                let caps = self.re_compact_code.captures(word)?;
                let core = caps.get(1)?.as_str();
                if self.is_noise(word)
                    || self.is_noise(core)
                    || self.starts_with_domain_suffix(&text[m.end()..])
                {
                    return None;
                }
                Some(core.to_string())
            })
            .next()
    }
}
