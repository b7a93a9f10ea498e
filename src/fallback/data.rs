//! Static locale knowledge: likely subtags, macro-region containment,
//! legacy language replacements and special-case fallbacks.
//!
//! Curated from CLDR likely-subtags and parentLocales data. The tables are
//! constant, initialized at load time, and safe to read from any thread.

use phf::{Map, phf_map};

/// language → the script it is overwhelmingly written in.
pub static LIKELY_SCRIPT: Map<&'static str, &'static str> = phf_map! {
    "am" => "Ethi",
    "ar" => "Arab",
    "as" => "Beng",
    "az" => "Latn",
    "be" => "Cyrl",
    "bg" => "Cyrl",
    "bn" => "Beng",
    "bo" => "Tibt",
    "cs" => "Latn",
    "da" => "Latn",
    "de" => "Latn",
    "dz" => "Tibt",
    "el" => "Grek",
    "en" => "Latn",
    "es" => "Latn",
    "et" => "Latn",
    "fa" => "Arab",
    "fi" => "Latn",
    "fil" => "Latn",
    "fr" => "Latn",
    "gu" => "Gujr",
    "he" => "Hebr",
    "hi" => "Deva",
    "hu" => "Latn",
    "hy" => "Armn",
    "id" => "Latn",
    "it" => "Latn",
    "ja" => "Jpan",
    "jv" => "Latn",
    "ka" => "Geor",
    "kk" => "Cyrl",
    "km" => "Khmr",
    "kn" => "Knda",
    "ko" => "Kore",
    "ky" => "Cyrl",
    "lo" => "Laoo",
    "lt" => "Latn",
    "lv" => "Latn",
    "ml" => "Mlym",
    "mn" => "Cyrl",
    "mr" => "Deva",
    "ms" => "Latn",
    "my" => "Mymr",
    "nb" => "Latn",
    "ne" => "Deva",
    "nl" => "Latn",
    "or" => "Orya",
    "pa" => "Guru",
    "pl" => "Latn",
    "ps" => "Arab",
    "pt" => "Latn",
    "ro" => "Latn",
    "ru" => "Cyrl",
    "si" => "Sinh",
    "sk" => "Latn",
    "sl" => "Latn",
    "sr" => "Cyrl",
    "sv" => "Latn",
    "ta" => "Taml",
    "te" => "Telu",
    "th" => "Thai",
    "tr" => "Latn",
    "ug" => "Arab",
    "uk" => "Cyrl",
    "ur" => "Arab",
    "uz" => "Latn",
    "vi" => "Latn",
    "yi" => "Hebr",
    "zh" => "Hans",
};

/// `language-REGION` → script, where the region flips the default.
pub static LIKELY_SCRIPT_FOR_REGION: Map<&'static str, &'static str> = phf_map! {
    "az-IQ" => "Arab",
    "az-IR" => "Arab",
    "kk-CN" => "Arab",
    "kk-IR" => "Arab",
    "mn-CN" => "Mong",
    "pa-PK" => "Arab",
    "sr-ME" => "Latn",
    "sr-RO" => "Latn",
    "sr-TR" => "Latn",
    "uz-AF" => "Arab",
    "uz-CN" => "Cyrl",
    "zh-HK" => "Hant",
    "zh-MO" => "Hant",
    "zh-TW" => "Hant",
};

/// language → the region its default locale lives in.
pub static LIKELY_REGION: Map<&'static str, &'static str> = phf_map! {
    "am" => "ET",
    "ar" => "EG",
    "as" => "IN",
    "az" => "AZ",
    "be" => "BY",
    "bg" => "BG",
    "bn" => "BD",
    "bo" => "CN",
    "cs" => "CZ",
    "da" => "DK",
    "de" => "DE",
    "dz" => "BT",
    "el" => "GR",
    "en" => "US",
    "es" => "ES",
    "et" => "EE",
    "fa" => "IR",
    "fi" => "FI",
    "fil" => "PH",
    "fr" => "FR",
    "gu" => "IN",
    "he" => "IL",
    "hi" => "IN",
    "hu" => "HU",
    "hy" => "AM",
    "id" => "ID",
    "it" => "IT",
    "ja" => "JP",
    "jv" => "ID",
    "ka" => "GE",
    "kk" => "KZ",
    "km" => "KH",
    "kn" => "IN",
    "ko" => "KR",
    "ky" => "KG",
    "lo" => "LA",
    "lt" => "LT",
    "lv" => "LV",
    "ml" => "IN",
    "mn" => "MN",
    "mr" => "IN",
    "ms" => "MY",
    "my" => "MM",
    "nb" => "NO",
    "ne" => "NP",
    "nl" => "NL",
    "or" => "IN",
    "pa" => "IN",
    "pl" => "PL",
    "ps" => "AF",
    "pt" => "BR",
    "ro" => "RO",
    "ru" => "RU",
    "si" => "LK",
    "sk" => "SK",
    "sl" => "SI",
    "sr" => "RS",
    "sv" => "SE",
    "ta" => "IN",
    "te" => "IN",
    "th" => "TH",
    "tr" => "TR",
    "ug" => "CN",
    "uk" => "UA",
    "ur" => "PK",
    "uz" => "UZ",
    "vi" => "VN",
    "yi" => "001",
    "zh" => "CN",
};

/// `language-Script` → region, where the script flips the default.
pub static LIKELY_REGION_FOR_SCRIPT: Map<&'static str, &'static str> = phf_map! {
    "az-Arab" => "IR",
    "az-Cyrl" => "AZ",
    "en-Qaag" => "GB",
    "kk-Arab" => "CN",
    "mn-Mong" => "CN",
    "pa-Arab" => "PK",
    "sr-Latn" => "RS",
    "uz-Arab" => "AF",
    "uz-Cyrl" => "UZ",
    "zh-Hans" => "CN",
    "zh-Hant" => "TW",
};

/// `language[-Script]-REGION` → parent locale tag. A child region falls back
/// to its designated macro-region grouping before losing the region
/// entirely. Chains are curated to at most two hops before the region
/// strips away, which is what bounds the track-path depth.
pub static PARENT_LOCALE: Map<&'static str, &'static str> = phf_map! {
    "en-150" => "en-001",
    "en-AT" => "en-150",
    "en-AU" => "en-001",
    "en-BE" => "en-150",
    "en-CA" => "en-001",
    "en-CH" => "en-150",
    "en-DE" => "en-150",
    "en-DK" => "en-150",
    "en-FI" => "en-150",
    "en-GB" => "en-001",
    "en-HK" => "en-001",
    "en-IE" => "en-001",
    "en-IN" => "en-001",
    "en-NL" => "en-150",
    "en-NZ" => "en-001",
    "en-SE" => "en-150",
    "en-SG" => "en-001",
    "en-ZA" => "en-001",
    "es-AR" => "es-419",
    "es-BO" => "es-419",
    "es-CL" => "es-419",
    "es-CO" => "es-419",
    "es-CR" => "es-419",
    "es-CU" => "es-419",
    "es-DO" => "es-419",
    "es-EC" => "es-419",
    "es-GT" => "es-419",
    "es-HN" => "es-419",
    "es-MX" => "es-419",
    "es-NI" => "es-419",
    "es-PA" => "es-419",
    "es-PE" => "es-419",
    "es-PR" => "es-419",
    "es-PY" => "es-419",
    "es-SV" => "es-419",
    "es-US" => "es-419",
    "es-UY" => "es-419",
    "es-VE" => "es-419",
    "pt-AO" => "pt-PT",
    "pt-CV" => "pt-PT",
    "pt-GW" => "pt-PT",
    "pt-MO" => "pt-PT",
    "pt-MZ" => "pt-PT",
    "pt-ST" => "pt-PT",
    "pt-TL" => "pt-PT",
    "zh-Hant-MO" => "zh-Hant-HK",
    "zh-MO" => "zh-HK",
};

/// Legacy ISO 639 code → its canonical replacement. Both spellings of a
/// language must negotiate as the same language.
pub static LANGUAGE_REPLACEMENT: Map<&'static str, &'static str> = phf_map! {
    "in" => "id",
    "iw" => "he",
    "ji" => "yi",
    "jw" => "jv",
    "mo" => "ro",
    "sh" => "sr",
    "tl" => "fil",
};

/// Request tag → the candidate that should rank right behind an exact
/// match, ahead of anything the generic containment walk would pick.
///
/// `Qaag` is the pseudo-script marker used by transliteration and
/// pseudo-localization flows; its text is built on British English, so a
/// `en-Qaag` request prefers `en-GB` over the `en` default locale. Macao
/// Traditional Chinese likewise prefers Hong Kong over the Taiwan default.
pub static SPECIAL_FALLBACK: Map<&'static str, &'static str> = phf_map! {
    "en-Qaag" => "en-GB",
    "zh-Hant-MO" => "zh-Hant-HK",
    "zh-MO" => "zh-HK",
};
