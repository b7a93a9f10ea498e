//! Fallback resolution: the ancestor chain of a locale and the static
//! knowledge needed to walk it.
//!
//! A locale falls back by climbing its *track path*: the full locale first,
//! then any designated macro-region parent (`en-AU` belongs to the `en-001`
//! grouping before it is plain `en`), then the region-stripped locale, then
//! the bare language, and finally the root. Distance along these paths is
//! what the matcher uses to rank candidates that agree on language and
//! script.

pub mod data;

use crate::key::LocaleKey;
use crate::locale::LocaleInfo;
use smallvec::SmallVec;

/// Inline capacity of a track path. Derived from the data, not arbitrary: a
/// locale sheds its region through at most two macro-region hops (see
/// [`data::PARENT_LOCALE`]), then its script, then its language: five
/// entries including the root. A path longer than this spills to the heap
/// instead of truncating.
pub const TRACK_PATH_DEPTH: usize = 5;

/// Upper bound on data-driven parent hops, in case the containment table
/// ever grows a cycle.
const MAX_PARENT_HOPS: usize = 4;

/// Ordered ancestor chain, most specific first, always ending at
/// [`LocaleKey::ROOT`].
pub type TrackPath = SmallVec<[LocaleKey; TRACK_PATH_DEPTH]>;

// Longest table key: two 4-char subtags and a separator, or three subtags
// and two separators for parent lookups.
const KEY_CAP: usize = 14;

/// Join non-empty subtags with `-` into a caller-provided stack buffer.
fn join_key<'a>(buf: &'a mut [u8; KEY_CAP], parts: &[&str]) -> &'a str {
    let mut n = 0;
    for part in parts.iter().filter(|p| !p.is_empty()) {
        if n > 0 {
            buf[n] = b'-';
            n += 1;
        }
        buf[n..n + part.len()].copy_from_slice(part.as_bytes());
        n += part.len();
    }
    std::str::from_utf8(&buf[..n]).unwrap_or("")
}

/// Canonical spelling of a language code: legacy codes (`iw`, `tl`, …) map
/// to their replacements, everything else passes through.
#[inline]
pub fn canonical_language(code: &str) -> &str {
    data::LANGUAGE_REPLACEMENT.get(code).copied().unwrap_or(code)
}

/// Default script for a language, taking the region into account when it
/// flips the answer (`zh-TW` → `Hant`, `sr-ME` → `Latn`).
pub fn likely_script(language: &str, region: &str) -> Option<&'static str> {
    let mut buf = [0u8; KEY_CAP];
    if !region.is_empty() {
        let key = join_key(&mut buf, &[language, region]);
        if let Some(&script) = data::LIKELY_SCRIPT_FOR_REGION.get(key) {
            return Some(script);
        }
    }
    data::LIKELY_SCRIPT.get(language).copied()
}

/// Default region for a language, taking the script into account when it
/// flips the answer (`zh-Hant` → `TW`, `az-Arab` → `IR`).
pub fn likely_region(language: &str, script: &str) -> Option<&'static str> {
    let mut buf = [0u8; KEY_CAP];
    if !script.is_empty() {
        let key = join_key(&mut buf, &[language, script]);
        if let Some(&region) = data::LIKELY_REGION_FOR_SCRIPT.get(key) {
            return Some(region);
        }
    }
    data::LIKELY_REGION.get(language).copied()
}

/// The preferred fallback candidate for requests with bespoke negotiation
/// behavior (`Qaag` pseudo-locales, Macao Chinese). Consulted by the
/// matcher before the generic containment walk.
pub fn special_fallback(request: &LocaleInfo) -> Option<LocaleInfo> {
    let mut buf = [0u8; KEY_CAP];
    let hit = if request.has_script() {
        let full = join_key(
            &mut buf,
            &[request.language(), request.script(), request.region()],
        );
        data::SPECIAL_FALLBACK.get(full).copied()
    } else {
        None
    }
    .or_else(|| {
        let mut buf = [0u8; KEY_CAP];
        let key = join_key(&mut buf, &[request.language(), request.region()]);
        data::SPECIAL_FALLBACK.get(key).copied()
    })?;
    Some(parse_table_tag(hit))
}

/// Designated parent of a locale per the containment table, preserving the
/// child's script when the table entry carries none.
fn parent_locale(locale: &LocaleInfo) -> Option<LocaleInfo> {
    let mut buf = [0u8; KEY_CAP];
    let hit = if locale.has_script() {
        let full = join_key(
            &mut buf,
            &[locale.language(), locale.script(), locale.region()],
        );
        data::PARENT_LOCALE.get(full).copied()
    } else {
        None
    }
    .or_else(|| {
        let mut buf = [0u8; KEY_CAP];
        let key = join_key(&mut buf, &[locale.language(), locale.region()]);
        data::PARENT_LOCALE.get(key).copied()
    })?;
    let parent = parse_table_tag(hit);
    if locale.has_script() && !parent.has_script() {
        return Some(LocaleInfo::from_subtags(
            parent.language_subtag(),
            locale.script_subtag(),
            parent.region_subtag(),
        ));
    }
    Some(parent)
}

fn parse_table_tag(tag: &str) -> LocaleInfo {
    LocaleInfo::from_tag(tag).expect("fallback table holds a malformed tag – this is a bug")
}

/// Compute the ancestor chain of a locale, most specific entry first.
///
/// Regions fall back through the containment table where an entry exists
/// and strip away where none does; the script strips next, and the chain
/// always terminates at [`LocaleKey::ROOT`].
pub fn track_path(locale: &LocaleInfo) -> TrackPath {
    let mut path = TrackPath::new();
    let mut cur = *locale;
    path.push(cur.key());
    let mut hops = 0;
    while cur.has_region() {
        cur = if hops < MAX_PARENT_HOPS {
            parent_locale(&cur).unwrap_or_else(|| cur.without_region())
        } else {
            cur.without_region()
        };
        hops += 1;
        path.push(cur.key());
    }
    if cur.has_script() {
        cur = cur.without_script();
        path.push(cur.key());
    }
    if path.last() != Some(&LocaleKey::ROOT) {
        path.push(LocaleKey::ROOT);
    }
    path
}

/// The ancestor chain decoded back to locales, for resource-lookup callers
/// that probe each entry in order.
pub fn fallback_chain(locale: &LocaleInfo) -> Vec<LocaleInfo> {
    track_path(locale)
        .iter()
        .map(|&key| LocaleInfo::from_key(key))
        .collect()
}

/// Distance between two chains: the smallest `i + j` with
/// `request[i] == candidate[j]`, the position sum of the earliest common
/// ancestor. Zero means identical locales; both chains end at the root, so
/// a common entry always exists.
pub fn path_distance(candidate: &TrackPath, request: &TrackPath) -> usize {
    let mut best = usize::MAX;
    for (i, r) in request.iter().enumerate() {
        if i >= best {
            break;
        }
        for (j, c) in candidate.iter().enumerate() {
            if i + j >= best {
                break;
            }
            if r == c {
                best = i + j;
                break;
            }
        }
    }
    best
}
