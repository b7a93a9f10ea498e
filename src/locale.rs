//! The `LocaleInfo` value type: a canonical `(language, script, region)`
//! subtag triple. Subtags are at most four ASCII characters, stored inline:
//! the type is `Copy` and never touches the heap.
//!
//! Full BCP-47 parsing (extensions, variants, transforms) is a collaborator
//! concern; [`LocaleInfo::from_tag`] only does the thin normalization every
//! caller needs: strip `.encoding` / `@modifier` suffixes, accept `_` as a
//! separator, classify the leading subtags by shape, ignore the rest.

use crate::key::LocaleKey;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from the validation boundary. Past this point every operation in
/// the crate is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("invalid language subtag `{0}`")]
    InvalidLanguage(String),
    #[error("invalid script subtag `{0}`")]
    InvalidScript(String),
    #[error("invalid region subtag `{0}`")]
    InvalidRegion(String),
    #[error("empty locale tag")]
    EmptyTag,
}

const SUBTAG_CAP: usize = 4;

/// One subtag, stored inline. Empty means absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Subtag {
    bytes: [u8; SUBTAG_CAP],
    len: u8,
}

impl Subtag {
    pub const EMPTY: Self = Self {
        bytes: [0; SUBTAG_CAP],
        len: 0,
    };

    /// Copy up to four ASCII bytes; anything longer is truncated. Callers in
    /// this crate only pass validated ASCII.
    pub(crate) fn from_ascii_lossy(src: &[u8]) -> Self {
        let mut bytes = [0u8; SUBTAG_CAP];
        let len = src.len().min(SUBTAG_CAP);
        bytes[..len].copy_from_slice(&src[..len]);
        Self {
            bytes,
            len: len as u8,
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        // Only ever constructed from ASCII.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    pub(crate) fn make_lower_case(&mut self) {
        self.bytes.make_ascii_lowercase();
    }

    pub(crate) fn make_upper_case(&mut self) {
        self.bytes.make_ascii_uppercase();
    }

    /// `hans` → `Hans`, the ISO 15924 canonical form.
    pub(crate) fn make_title_case(&mut self) {
        self.bytes.make_ascii_lowercase();
        if self.len > 0 {
            self.bytes[0].make_ascii_uppercase();
        }
    }
}

impl std::ops::Deref for Subtag {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Subtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Subtag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[inline]
fn is_alpha(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

#[inline]
fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A resolved locale: language, script and region subtags in canonical case
/// (`zh`, `Hans`, `CN`), each possibly absent. Immutable, `Copy`, ordered by
/// `(language, script, region)`, the deterministic order the matcher uses
/// as its final tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LocaleInfo {
    language: Subtag,
    script: Subtag,
    region: Subtag,
}

impl LocaleInfo {
    /// The root locale: all subtags absent. Renders as the empty string.
    pub const ROOT: Self = Self {
        language: Subtag::EMPTY,
        script: Subtag::EMPTY,
        region: Subtag::EMPTY,
    };

    /// Build a locale from raw subtags, validating shape and canonicalizing
    /// case. Empty strings mean absent and are always accepted.
    ///
    /// - language: 1–4 ASCII letters, stored lowercase
    /// - script: 1–4 ASCII letters, stored title case
    /// - region: 1–4 ASCII letters (stored uppercase) or 1–4 digits
    pub fn new(language: &str, script: &str, region: &str) -> Result<Self, LocaleError> {
        let language = match language {
            "" => Subtag::EMPTY,
            s if s.len() <= SUBTAG_CAP && is_alpha(s) => {
                let mut tag = Subtag::from_ascii_lossy(s.as_bytes());
                tag.make_lower_case();
                tag
            }
            s => return Err(LocaleError::InvalidLanguage(s.to_owned())),
        };
        let script = match script {
            "" => Subtag::EMPTY,
            s if s.len() <= SUBTAG_CAP && is_alpha(s) => {
                let mut tag = Subtag::from_ascii_lossy(s.as_bytes());
                tag.make_title_case();
                tag
            }
            s => return Err(LocaleError::InvalidScript(s.to_owned())),
        };
        let region = match region {
            "" => Subtag::EMPTY,
            s if s.len() <= SUBTAG_CAP && is_alpha(s) => {
                let mut tag = Subtag::from_ascii_lossy(s.as_bytes());
                tag.make_upper_case();
                tag
            }
            s if s.len() <= SUBTAG_CAP && is_numeric(s) => Subtag::from_ascii_lossy(s.as_bytes()),
            s => return Err(LocaleError::InvalidRegion(s.to_owned())),
        };
        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// Parse a locale tag: `zh-Hans-CN`, `sr_Latn_RS`, `en_US.UTF-8`,
    /// `de-DE@euro`. Subtags after the region (variants, extension
    /// singletons and everything they introduce) are ignored.
    pub fn from_tag(tag: &str) -> Result<Self, LocaleError> {
        let stripped = tag.trim().split(['.', '@']).next().unwrap_or("");
        let mut parts = stripped.split(['-', '_']).filter(|p| !p.is_empty());
        let language = parts.next().ok_or(LocaleError::EmptyTag)?;
        if language.len() > SUBTAG_CAP || !is_alpha(language) {
            return Err(LocaleError::InvalidLanguage(language.to_owned()));
        }
        let mut script = "";
        let mut region = "";
        for part in parts {
            if part.len() == 1 {
                // Extension singleton: out of scope from here on.
                break;
            }
            if script.is_empty() && region.is_empty() && part.len() == 4 && is_alpha(part) {
                script = part;
            } else if region.is_empty()
                && ((part.len() == 2 && is_alpha(part)) || (part.len() == 3 && is_numeric(part)))
            {
                region = part;
            } else if !region.is_empty() {
                // Variants follow the region; nothing left for us.
                break;
            }
        }
        Self::new(language, script, region)
    }

    /// Rebuild a locale from its packed key. Total: the key decodes to the
    /// canonical subtags it was built from.
    pub fn from_key(key: LocaleKey) -> Self {
        Self {
            language: key.language().decode(),
            script: key.script().decode(),
            region: key.region().decode(),
        }
    }

    /// Assemble from already-canonical subtags. Crate-internal: used where
    /// the subtags come out of this crate's own tables or values.
    pub(crate) const fn from_subtags(language: Subtag, script: Subtag, region: Subtag) -> Self {
        Self {
            language,
            script,
            region,
        }
    }

    #[inline(always)]
    pub fn language(&self) -> &str {
        self.language.as_str()
    }

    #[inline(always)]
    pub fn script(&self) -> &str {
        self.script.as_str()
    }

    #[inline(always)]
    pub fn region(&self) -> &str {
        self.region.as_str()
    }

    #[inline(always)]
    pub(crate) const fn language_subtag(&self) -> Subtag {
        self.language
    }

    #[inline(always)]
    pub(crate) const fn script_subtag(&self) -> Subtag {
        self.script
    }

    #[inline(always)]
    pub(crate) const fn region_subtag(&self) -> Subtag {
        self.region
    }

    #[inline(always)]
    pub fn has_script(&self) -> bool {
        !self.script.is_empty()
    }

    #[inline(always)]
    pub fn has_region(&self) -> bool {
        !self.region.is_empty()
    }

    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.script.is_empty() && self.region.is_empty()
    }

    /// The packed form. Pure, cheap, recomputed on demand.
    #[inline]
    pub fn key(&self) -> LocaleKey {
        LocaleKey::of(self)
    }

    /// The same locale with the region dropped.
    #[inline]
    pub fn without_region(&self) -> Self {
        Self {
            region: Subtag::EMPTY,
            ..*self
        }
    }

    /// The same locale with the script dropped.
    #[inline]
    pub fn without_script(&self) -> Self {
        Self {
            script: Subtag::EMPTY,
            ..*self
        }
    }

    /// Canonical tag form: `language[-Script][-REGION]`. Root renders empty.
    pub fn tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LocaleInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in [&self.language, &self.script, &self.region] {
            if part.is_empty() {
                continue;
            }
            if !first {
                f.write_str("-")?;
            }
            f.write_str(part.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for LocaleInfo {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_case() {
        let locale = LocaleInfo::new("ZH", "hans", "cn").unwrap();
        assert_eq!(locale.language(), "zh");
        assert_eq!(locale.script(), "Hans");
        assert_eq!(locale.region(), "CN");
    }

    #[test]
    fn empty_subtags_are_absent() {
        let locale = LocaleInfo::new("en", "", "").unwrap();
        assert!(!locale.has_script());
        assert!(!locale.has_region());
        assert_eq!(locale.tag(), "en");
    }

    #[test]
    fn rejects_malformed_subtags() {
        assert!(matches!(
            LocaleInfo::new("e1", "", ""),
            Err(LocaleError::InvalidLanguage(_))
        ));
        assert!(matches!(
            LocaleInfo::new("en", "La-n", ""),
            Err(LocaleError::InvalidScript(_))
        ));
        assert!(matches!(
            LocaleInfo::new("en", "", "U$"),
            Err(LocaleError::InvalidRegion(_))
        ));
        assert!(matches!(
            LocaleInfo::new("english", "", ""),
            Err(LocaleError::InvalidLanguage(_))
        ));
    }

    #[test]
    fn numeric_regions_are_valid() {
        let locale = LocaleInfo::new("es", "", "419").unwrap();
        assert_eq!(locale.region(), "419");
        assert_eq!(locale.tag(), "es-419");
    }

    #[test]
    fn parses_common_tag_shapes() {
        assert_eq!(
            LocaleInfo::from_tag("zh-Hans-CN").unwrap(),
            LocaleInfo::new("zh", "Hans", "CN").unwrap()
        );
        assert_eq!(
            LocaleInfo::from_tag("sr_Latn_RS").unwrap(),
            LocaleInfo::new("sr", "Latn", "RS").unwrap()
        );
        assert_eq!(
            LocaleInfo::from_tag("en_US.UTF-8").unwrap(),
            LocaleInfo::new("en", "", "US").unwrap()
        );
        assert_eq!(
            LocaleInfo::from_tag("de-DE@euro").unwrap(),
            LocaleInfo::new("de", "", "DE").unwrap()
        );
        assert_eq!(
            LocaleInfo::from_tag("es-419").unwrap(),
            LocaleInfo::new("es", "", "419").unwrap()
        );
    }

    #[test]
    fn parsing_skips_variants_and_extensions() {
        assert_eq!(
            LocaleInfo::from_tag("ca-ES-valencia").unwrap(),
            LocaleInfo::new("ca", "", "ES").unwrap()
        );
        assert_eq!(
            LocaleInfo::from_tag("en-US-u-hc-h12").unwrap(),
            LocaleInfo::new("en", "", "US").unwrap()
        );
    }

    #[test]
    fn parsing_rejects_junk() {
        assert!(LocaleInfo::from_tag("").is_err());
        assert!(LocaleInfo::from_tag("   ").is_err());
        assert!(LocaleInfo::from_tag("123").is_err());
    }

    #[test]
    fn display_round_trips_through_from_tag() {
        for tag in ["zh-Hans-CN", "en-US", "sr-Latn", "es-419", "ja"] {
            let locale = LocaleInfo::from_tag(tag).unwrap();
            assert_eq!(locale.tag(), tag);
            assert_eq!(LocaleInfo::from_tag(&locale.tag()).unwrap(), locale);
        }
    }

    #[test]
    fn key_round_trips_through_from_key() {
        for tag in ["zh-Hans-CN", "en-001", "sr-Latn-RS", "es-419", "ja"] {
            let locale = LocaleInfo::from_tag(tag).unwrap();
            assert_eq!(LocaleInfo::from_key(locale.key()), locale);
        }
        assert_eq!(
            LocaleInfo::from_key(crate::key::LocaleKey::ROOT),
            LocaleInfo::ROOT
        );
    }

    #[test]
    fn root_renders_empty() {
        assert_eq!(LocaleInfo::ROOT.tag(), "");
        assert!(LocaleInfo::ROOT.is_root());
    }
}
