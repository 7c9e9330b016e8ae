//! Identifier resolution for user-supplied audio references.
//!
//! A track's `audio_url` can be a cloud share link, a direct URL or a
//! local-transient reference. When the link carries a recognizable content
//! identifier we extract it so the endpoint generator can derive fallback
//! stream URLs; everything else plays as-is with no retry list.

use std::collections::HashSet;

/// Scheme of references whose lifetime is tied to the current session.
/// They are played as-is and can never be re-fetched after a reload.
pub const LOCAL_TRANSIENT_SCHEME: &str = "blob:";

/// Minimum length of a content identifier token.
const MIN_ID_LEN: usize = 25;

/// Maximum token length accepted by the batch link scanner.
const MAX_SCAN_ID_LEN: usize = 50;

/// Long path keywords that look like identifiers to the batch scanner but
/// never are.
const SCAN_DENYLIST: &[&str] = &[
    "usercontent",
    "spreadsheets",
    "presentation",
    "accounts",
    "sharing",
    "download",
    "export",
];

/// A canonical content identifier extracted from a cloud share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudId(String);

impl CloudId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The original hosting page for this identifier. Opening it is the
    /// manual-repair step offered when every stream endpoint was blocked:
    /// it lets the user refresh access authorization by hand.
    pub fn share_page_url(&self) -> String {
        format!("https://drive.google.com/file/d/{}/view", self.0)
    }
}

impl std::fmt::Display for CloudId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the canonical identifier from `reference`, if it has one.
///
/// Local-transient references always resolve to `None`; no fallback
/// endpoints exist for them. Otherwise the extraction strategies run in
/// order: the `id` query parameter, a path segment after `/d/`, a path
/// segment after `/file/d/`. First match wins; no match means the reference
/// is treated as an opaque direct URL.
pub fn resolve(reference: &str) -> Option<CloudId> {
    if reference.starts_with(LOCAL_TRANSIENT_SCHEME) {
        return None;
    }

    query_param_id(reference)
        .or_else(|| path_segment_after(reference, "/d/"))
        .or_else(|| path_segment_after(reference, "/file/d/"))
        .map(|token| CloudId(token.to_string()))
}

/// Strategy (a): an `id` query parameter.
fn query_param_id(reference: &str) -> Option<&str> {
    let (_, query) = reference.split_once('?')?;
    let query = query.split('#').next().unwrap_or(query);

    query
        .split('&')
        .filter_map(|pair| pair.strip_prefix("id="))
        .find(|value| is_id_token(value))
}

/// Strategies (b)/(c): the path segment following `marker`.
fn path_segment_after<'a>(reference: &'a str, marker: &str) -> Option<&'a str> {
    let start = reference.find(marker)? + marker.len();
    let rest = &reference[start..];
    let end = rest
        .find(|c: char| c == '/' || c == '?' || c == '#')
        .unwrap_or(rest.len());
    let segment = &rest[..end];

    is_id_token(segment).then_some(segment)
}

fn is_id_token(token: &str) -> bool {
    token.len() >= MIN_ID_LEN
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Scan a free-text paste for identifier-shaped tokens.
///
/// Tokens of 25-50 word characters/hyphens are kept; denylisted path
/// keywords and duplicates within the same paste are discarded. First-seen
/// order is preserved.
pub fn scan_links(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for token in word_tokens(text) {
        if token.len() < MIN_ID_LEN || token.len() > MAX_SCAN_ID_LEN {
            continue;
        }
        if is_denylisted(token) {
            continue;
        }
        if seen.insert(token.to_string()) {
            found.push(token.to_string());
        }
    }

    found
}

fn is_denylisted(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    SCAN_DENYLIST.iter().any(|kw| lower.contains(kw))
}

/// Split `text` into maximal runs of `[A-Za-z0-9_-]`.
fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .filter(|t| !t.is_empty())
}
