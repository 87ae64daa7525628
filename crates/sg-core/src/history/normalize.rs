//! Canonical URL form used as the history dedup key.

use url::Url;

/// Query parameters that identify a campaign, not a document.
pub const TRACKING_PARAMS: [&str; 11] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "utm_id",
    "gclid",
    "fbclid",
    "mc_cid",
    "mc_eid",
    "gift",
];

/// Canonicalize a URL for history deduplication.
///
/// Strips the fragment and tracking parameters, lowercases the host,
/// drops default ports, and trims trailing slashes (the root path stays
/// `/`). Idempotent. Unparseable input is returned unchanged so a bad
/// stored entry can still be matched against itself.
pub fn normalize_history_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    url.set_fragment(None);

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    let trimmed = url.path().trim_end_matches('/').to_string();
    if trimmed.is_empty() {
        url.set_path("/");
    } else {
        url.set_path(&trimmed);
    }

    // Host lowercasing and default-port removal happen at parse time.
    url.to_string()
}
