//! Packed integer representation of locale subtags.
//!
//! Every subtag is at most four ASCII characters, so each one fits in a
//! fixed-width bit field and a whole locale fits in a single `u64`:
//!
//! ```text
//! bit 63        40 39        20 19         0
//!     ┌───────────┬────────────┬───────────┐
//!     │  region   │   script   │ language  │
//!     │ 4×6 bits  │  4×5 bits  │ 4×5 bits  │
//!     └───────────┴────────────┴───────────┘
//! ```
//!
//! Letters map to `1..=26` and (for regions) digits to `27..=36`; `0` marks
//! an empty slot, so the all-zero key is the root locale. The first
//! character of a subtag lives in the most significant slot of its field,
//! which makes the numeric order of a field agree with the lexicographic
//! order of the subtag it encodes, and the region field sits in the top
//! bits so whole-key ordering is dominated by the region, the property the
//! fallback distance computation relies on.
//!
//! Encoding is injective over valid subtag triples: equal keys mean equal
//! `(language, script, region)` and vice versa. Keys are pure functions of
//! their input, cheap enough to recompute on demand, and never persisted.

use crate::locale::{LocaleInfo, Subtag};

const LETTER_SLOT_BITS: u32 = 5;
const ALNUM_SLOT_BITS: u32 = 6;
const SLOTS: u32 = 4;

const LANGUAGE_BITS: u32 = SLOTS * LETTER_SLOT_BITS;
const SCRIPT_BITS: u32 = SLOTS * LETTER_SLOT_BITS;
const REGION_BITS: u32 = SLOTS * ALNUM_SLOT_BITS;

const SCRIPT_SHIFT: u32 = LANGUAGE_BITS;
const REGION_SHIFT: u32 = LANGUAGE_BITS + SCRIPT_BITS;

const LANGUAGE_MASK: u64 = (1 << LANGUAGE_BITS) - 1;
const SCRIPT_MASK: u64 = (1 << SCRIPT_BITS) - 1;
const REGION_MASK: u64 = (1 << REGION_BITS) - 1;

// Alphabet values inside a slot.
const LETTER_BASE: u32 = 1; // 'a' => 1 … 'z' => 26
const DIGIT_BASE: u32 = 27; // '0' => 27 … '9' => 36

#[inline(always)]
const fn encode_letter(b: u8) -> Option<u32> {
    if b.is_ascii_alphabetic() {
        Some((b.to_ascii_lowercase() - b'a') as u32 + LETTER_BASE)
    } else {
        None
    }
}

#[inline(always)]
const fn encode_alnum(b: u8) -> Option<u32> {
    if b.is_ascii_alphabetic() {
        Some((b.to_ascii_lowercase() - b'a') as u32 + LETTER_BASE)
    } else if b.is_ascii_digit() {
        Some((b - b'0') as u32 + DIGIT_BASE)
    } else {
        None
    }
}

#[inline(always)]
const fn decode_symbol(v: u32) -> u8 {
    if v >= DIGIT_BASE {
        (v - DIGIT_BASE) as u8 + b'0'
    } else {
        (v - LETTER_BASE) as u8 + b'a'
    }
}

/// Pack up to four characters into slots of `slot_bits` each, first
/// character highest. Returns `None` on an out-of-alphabet character or an
/// over-long subtag.
#[inline]
fn pack(code: &str, slot_bits: u32, enc: impl Fn(u8) -> Option<u32>) -> Option<u32> {
    let bytes = code.as_bytes();
    if bytes.len() > SLOTS as usize {
        return None;
    }
    let mut raw = 0u32;
    for (i, &b) in bytes.iter().enumerate() {
        raw |= enc(b)? << ((SLOTS - 1 - i as u32) * slot_bits);
    }
    Some(raw)
}

/// Unpack slots back into ASCII bytes, stopping at the first empty slot.
#[inline]
fn unpack(raw: u32, slot_bits: u32) -> Subtag {
    let mask = (1u32 << slot_bits) - 1;
    let mut bytes = [0u8; SLOTS as usize];
    let mut len = 0usize;
    for i in 0..SLOTS {
        let v = (raw >> ((SLOTS - 1 - i) * slot_bits)) & mask;
        if v == 0 {
            break;
        }
        bytes[len] = decode_symbol(v);
        len += 1;
    }
    Subtag::from_ascii_lossy(&bytes[..len])
}

macro_rules! field_key {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(u32);

        impl $name {
            /// The absent subtag. Encoding an empty string yields this, and
            /// decoding it yields the empty subtag.
            pub const NULL: Self = Self(0);

            #[inline(always)]
            pub const fn is_null(self) -> bool {
                self.0 == 0
            }

            #[inline(always)]
            pub const fn to_u32(self) -> u32 {
                self.0
            }
        }
    };
}

field_key!(LanguageKey, "Packed ISO 639 language code (4×5 bits).");
field_key!(ScriptKey, "Packed ISO 15924 script code (4×5 bits).");
field_key!(RegionKey, "Packed ISO 3166 / UN M49 region code (4×6 bits).");

impl LanguageKey {
    /// Encode a language code of up to four ASCII letters, case-insensitive.
    /// Empty input encodes to [`LanguageKey::NULL`]; anything outside the
    /// alphabet yields `None`.
    #[inline]
    pub fn encode(code: &str) -> Option<Self> {
        pack(code, LETTER_SLOT_BITS, encode_letter).map(Self)
    }

    /// Restore the lowercase language code.
    #[inline]
    pub fn decode(self) -> Subtag {
        unpack(self.0, LETTER_SLOT_BITS)
    }
}

impl ScriptKey {
    /// Encode a script code of up to four ASCII letters, case-insensitive.
    #[inline]
    pub fn encode(code: &str) -> Option<Self> {
        pack(code, LETTER_SLOT_BITS, encode_letter).map(Self)
    }

    /// Restore the script code in its canonical title case (`Hans`, `Latn`).
    #[inline]
    pub fn decode(self) -> Subtag {
        let mut tag = unpack(self.0, LETTER_SLOT_BITS);
        tag.make_title_case();
        tag
    }
}

impl RegionKey {
    /// Encode a region code of up to four ASCII letters or digits,
    /// case-insensitive. Digits cover three-digit UN M49 macro-region codes.
    #[inline]
    pub fn encode(code: &str) -> Option<Self> {
        pack(code, ALNUM_SLOT_BITS, encode_alnum).map(Self)
    }

    /// Restore the uppercase region code.
    #[inline]
    pub fn decode(self) -> Subtag {
        let mut tag = unpack(self.0, ALNUM_SLOT_BITS);
        tag.make_upper_case();
        tag
    }
}

/// A whole locale packed into one `u64`. See the module docs for the field
/// layout. Ordering is derived from the packed value: region first, then
/// script, then language, each field lexicographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct LocaleKey(u64);

impl LocaleKey {
    /// The root (empty) locale, the terminal entry of every track path.
    pub const ROOT: Self = Self(0);

    #[inline(always)]
    pub const fn from_parts(language: LanguageKey, script: ScriptKey, region: RegionKey) -> Self {
        Self(
            ((region.0 as u64) << REGION_SHIFT)
                | ((script.0 as u64) << SCRIPT_SHIFT)
                | language.0 as u64,
        )
    }

    /// Key of a [`LocaleInfo`]. Subtags held by a `LocaleInfo` are already
    /// canonical, so encoding cannot fail; a hypothetically bad field
    /// degrades to its null key rather than panicking.
    #[inline]
    pub fn of(locale: &LocaleInfo) -> Self {
        Self::from_parts(
            LanguageKey::encode(locale.language()).unwrap_or_default(),
            ScriptKey::encode(locale.script()).unwrap_or_default(),
            RegionKey::encode(locale.region()).unwrap_or_default(),
        )
    }

    #[inline(always)]
    pub const fn language(self) -> LanguageKey {
        LanguageKey((self.0 & LANGUAGE_MASK) as u32)
    }

    #[inline(always)]
    pub const fn script(self) -> ScriptKey {
        ScriptKey(((self.0 >> SCRIPT_SHIFT) & SCRIPT_MASK) as u32)
    }

    #[inline(always)]
    pub const fn region(self) -> RegionKey {
        RegionKey(((self.0 >> REGION_SHIFT) & REGION_MASK) as u32)
    }

    #[inline(always)]
    pub const fn has_script(self) -> bool {
        !self.script().is_null()
    }

    #[inline(always)]
    pub const fn has_region(self) -> bool {
        !self.region().is_null()
    }

    #[inline(always)]
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }

    /// The same locale with the region cleared: one fallback hop.
    #[inline(always)]
    pub const fn without_region(self) -> Self {
        Self(self.0 & !(REGION_MASK << REGION_SHIFT))
    }

    /// The same locale with the script cleared.
    #[inline(always)]
    pub const fn without_script(self) -> Self {
        Self(self.0 & !(SCRIPT_MASK << SCRIPT_SHIFT))
    }

    #[inline(always)]
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_subtags_encode_to_null() {
        assert_eq!(LanguageKey::encode(""), Some(LanguageKey::NULL));
        assert_eq!(ScriptKey::encode(""), Some(ScriptKey::NULL));
        assert_eq!(RegionKey::encode(""), Some(RegionKey::NULL));
    }

    #[test]
    fn null_key_decodes_to_empty() {
        assert_eq!(LanguageKey::NULL.decode().as_str(), "");
        assert_eq!(ScriptKey::NULL.decode().as_str(), "");
        assert_eq!(RegionKey::NULL.decode().as_str(), "");
    }

    #[test]
    fn encoding_is_deterministic_and_injective() {
        assert_eq!(LanguageKey::encode("zh"), LanguageKey::encode("zh"));
        assert_ne!(LanguageKey::encode("zh"), LanguageKey::encode("en"));
        assert_ne!(LanguageKey::encode("en"), LanguageKey::encode("eng"));
    }

    #[test]
    fn encoding_folds_case() {
        assert_eq!(ScriptKey::encode("HANS"), ScriptKey::encode("Hans"));
        assert_eq!(RegionKey::encode("cn"), RegionKey::encode("CN"));
    }

    #[test]
    fn rejects_out_of_alphabet_input() {
        assert_eq!(LanguageKey::encode("e1"), None);
        assert_eq!(LanguageKey::encode("toolong"), None);
        assert_eq!(ScriptKey::encode("Ha_s"), None);
        assert_eq!(RegionKey::encode("C#"), None);
    }

    #[test]
    fn decode_restores_canonical_case() {
        assert_eq!(LanguageKey::encode("ZH").unwrap().decode().as_str(), "zh");
        assert_eq!(ScriptKey::encode("hant").unwrap().decode().as_str(), "Hant");
        assert_eq!(RegionKey::encode("mo").unwrap().decode().as_str(), "MO");
        assert_eq!(RegionKey::encode("419").unwrap().decode().as_str(), "419");
    }

    #[test]
    fn field_order_matches_lexicographic_order() {
        let en = LanguageKey::encode("en").unwrap();
        let eng = LanguageKey::encode("eng").unwrap();
        let fr = LanguageKey::encode("fr").unwrap();
        assert!(en < eng);
        assert!(eng < fr);
    }

    #[test]
    fn region_dominates_whole_key_order() {
        let a = LocaleKey::from_parts(
            LanguageKey::encode("zz").unwrap(),
            ScriptKey::NULL,
            RegionKey::encode("AA").unwrap(),
        );
        let b = LocaleKey::from_parts(
            LanguageKey::encode("aa").unwrap(),
            ScriptKey::NULL,
            RegionKey::encode("ZZ").unwrap(),
        );
        assert!(a < b);
    }

    #[test]
    fn strippers_clear_exactly_one_field() {
        let key = LocaleKey::from_parts(
            LanguageKey::encode("zh").unwrap(),
            ScriptKey::encode("Hans").unwrap(),
            RegionKey::encode("CN").unwrap(),
        );
        let no_region = key.without_region();
        assert!(!no_region.has_region());
        assert_eq!(no_region.script(), key.script());
        assert_eq!(no_region.language(), key.language());

        let bare = no_region.without_script();
        assert!(!bare.has_script());
        assert_eq!(bare.language(), key.language());
        assert!(bare.without_region().without_script() == bare);
    }

    #[test]
    fn root_is_zero_and_round_trips() {
        assert_eq!(LocaleKey::ROOT.to_u64(), 0);
        assert!(LocaleKey::ROOT.is_root());
        let key = LocaleKey::from_parts(
            LanguageKey::encode("sr").unwrap(),
            ScriptKey::encode("Latn").unwrap(),
            RegionKey::encode("RS").unwrap(),
        );
        assert_eq!(LocaleKey::from_u64(key.to_u64()), key);
    }
}
