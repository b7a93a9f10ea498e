//! The suitability comparator and the matching API built on top of it.
//!
//! Candidate locales are ranked against a request by a strict precedence of
//! criteria, each stage only consulted when every earlier stage ties:
//!
//! 1. **Language**: canonical-code equality, so legacy spellings (`iw`,
//!    `tl`, …) match their replacements; a literal code match outranks a
//!    match that only holds through the replacement table.
//! 2. **Script**: equality of the effective script, inferring the likely
//!    script when a locale omits one.
//! 3. **Region**: closeness of the effective region along the request's
//!    fallback track path, with the special-fallback table consulted first
//!    and an absent region standing for the language's default region.
//! 4. **Default locale, then alphabetic order**: so the ranking is a total
//!    order and every negotiation has one deterministic answer.
//!
//! Everything here is pure: no state is shared between calls beyond the
//! read-only tables in [`crate::fallback::data`].

use crate::fallback::{self, TrackPath};
use crate::key::{LocaleKey, ScriptKey};
use crate::locale::{LocaleInfo, Subtag};
use std::cmp::Ordering;

/// Are two locales interchangeable for resource lookup?
///
/// True when the canonical languages agree and the effective scripts agree;
/// the region is ignored entirely. This is the coarse filter applied to a
/// candidate set before ranking with [`compare`].
pub fn is_match(a: &LocaleInfo, b: &LocaleInfo) -> bool {
    fallback::canonical_language(a.language()) == fallback::canonical_language(b.language())
        && effective_script_key(a) == effective_script_key(b)
}

/// Three-way ranking of two candidates against a request.
///
/// `Greater` means `current` is the strictly better match for `request`,
/// `Less` means `other` is. An absent candidate can never be suitable:
/// `(None, Some)` ranks `Less`, and only `(None, None)` or two identical
/// candidates tie at `Equal`.
pub fn compare(
    current: Option<&LocaleInfo>,
    other: Option<&LocaleInfo>,
    request: &LocaleInfo,
) -> Ordering {
    match (current, other) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(cur), Some(oth)) => compare_candidates(cur, oth, request),
    }
}

/// Pick the best candidate for a request, or `None` for an empty candidate
/// list. Candidates are expected to be pre-filtered with [`is_match`]; use
/// [`negotiate`] for filter-and-rank in one call.
pub fn best_match<'a>(
    request: &LocaleInfo,
    candidates: impl IntoIterator<Item = &'a LocaleInfo>,
) -> Option<&'a LocaleInfo> {
    let mut best: Option<&'a LocaleInfo> = None;
    for candidate in candidates {
        if compare(Some(candidate), best, request).is_gt() {
            best = Some(candidate);
        }
    }
    best
}

/// [`best_match`] rendered to its canonical tag; the empty string when the
/// candidate list is empty.
pub fn best_match_tag(request: &LocaleInfo, candidates: &[LocaleInfo]) -> String {
    best_match(request, candidates)
        .map(LocaleInfo::tag)
        .unwrap_or_default()
}

/// Filter candidates with [`is_match`], then rank the survivors.
pub fn negotiate<'a>(
    request: &LocaleInfo,
    candidates: impl IntoIterator<Item = &'a LocaleInfo>,
) -> Option<&'a LocaleInfo> {
    best_match(
        request,
        candidates.into_iter().filter(|c| is_match(request, c)),
    )
}

fn compare_candidates(cur: &LocaleInfo, oth: &LocaleInfo, request: &LocaleInfo) -> Ordering {
    if cur == oth {
        return Ordering::Equal;
    }
    let cur_lang = language_matches(cur, request);
    let oth_lang = language_matches(oth, request);
    let staged = match (cur_lang, oth_lang) {
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (true, true) => compare_exact_language(cur, oth, request)
            .then_with(|| compare_script(cur, oth, request))
            .then_with(|| compare_region(cur, oth, request)),
        // Neither speaks the requested language; region closeness still
        // yields a stable preference.
        (false, false) => compare_region(cur, oth, request),
    };
    staged.then_with(|| alphabetic(cur, oth))
}

#[inline]
fn language_matches(candidate: &LocaleInfo, request: &LocaleInfo) -> bool {
    fallback::canonical_language(candidate.language())
        == fallback::canonical_language(request.language())
}

/// Both candidates already match the request's language; prefer the one
/// whose code matches literally over one that only matches through the
/// legacy-replacement table.
#[inline]
fn compare_exact_language(cur: &LocaleInfo, oth: &LocaleInfo, request: &LocaleInfo) -> Ordering {
    let cur_exact = cur.language() == request.language();
    let oth_exact = oth.language() == request.language();
    cur_exact.cmp(&oth_exact)
}

/// The script a locale is effectively in: its own, or the likely script for
/// its language and region when it carries none. Table lookups go through
/// the canonical language so legacy spellings hit the same rows.
fn effective_script_str<'a>(locale: &'a LocaleInfo) -> &'a str {
    if locale.has_script() {
        locale.script()
    } else {
        fallback::likely_script(
            fallback::canonical_language(locale.language()),
            locale.region(),
        )
        .unwrap_or("")
    }
}

#[inline]
fn effective_script_key(locale: &LocaleInfo) -> ScriptKey {
    ScriptKey::encode(effective_script_str(locale)).unwrap_or_default()
}

fn compare_script(cur: &LocaleInfo, oth: &LocaleInfo, request: &LocaleInfo) -> Ordering {
    let want = effective_script_key(request);
    let cur_hit = effective_script_key(cur) == want;
    let oth_hit = effective_script_key(oth) == want;
    cur_hit.cmp(&oth_hit)
}

fn compare_region(cur: &LocaleInfo, oth: &LocaleInfo, request: &LocaleInfo) -> Ordering {
    let request_scope = region_scope(request);
    let request_path = fallback::track_path(&request_scope);
    let preferred = fallback::special_fallback(request).map(|p| region_scope(&p).key());
    let cur_d = region_distance(cur, &request_scope, &request_path, preferred);
    let oth_d = region_distance(oth, &request_scope, &request_path, preferred);
    // Smaller distance is the better match.
    oth_d
        .cmp(&cur_d)
        .then_with(|| is_default_locale(cur).cmp(&is_default_locale(oth)))
}

/// A locale reduced to what matters for region comparison: its canonical
/// language and its effective region, script cleared. Script differences
/// are settled by the script stage and must not skew region distance, and
/// legacy language spellings must land in the same scope as their
/// replacements so their regions compare against each other.
fn region_scope(locale: &LocaleInfo) -> LocaleInfo {
    let language = fallback::canonical_language(locale.language());
    let region = if locale.has_region() {
        locale.region_subtag()
    } else {
        // An absent region stands for the default region of the language
        // and script, not for "anywhere".
        match fallback::likely_region(language, effective_script_str(locale)) {
            Some(region) => Subtag::from_ascii_lossy(region.as_bytes()),
            None => Subtag::EMPTY,
        }
    };
    LocaleInfo::from_subtags(
        Subtag::from_ascii_lossy(language.as_bytes()),
        Subtag::EMPTY,
        region,
    )
}

/// Distance of a candidate's effective region from the request's, on a
/// doubled scale so the special-fallback preference (1) sorts strictly
/// between an exact match (0) and the nearest generic ancestor (≥2).
fn region_distance(
    locale: &LocaleInfo,
    request_scope: &LocaleInfo,
    request_path: &TrackPath,
    preferred: Option<LocaleKey>,
) -> usize {
    let scope = region_scope(locale);
    let key = scope.key();
    if key == request_scope.key() {
        return 0;
    }
    if preferred == Some(key) {
        return 1;
    }
    fallback::path_distance(&fallback::track_path(&scope), request_path).saturating_mul(2)
}

/// Is this locale the canonical default for its language, the one whose
/// effective region is the likely region?
fn is_default_locale(locale: &LocaleInfo) -> bool {
    let language = fallback::canonical_language(locale.language());
    match fallback::likely_region(language, effective_script_str(locale)) {
        Some(default_region) => region_scope(locale).region() == default_region,
        None => !locale.has_region(),
    }
}

/// Final tie-break: lexicographically smaller `(language, script, region)`
/// ranks higher, making the whole comparison a total order.
#[inline]
fn alphabetic(cur: &LocaleInfo, oth: &LocaleInfo) -> Ordering {
    oth.cmp(cur)
}
