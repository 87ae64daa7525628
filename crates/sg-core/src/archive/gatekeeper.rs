//! URL gatekeeper.
//!
//! Pure classifier that decides whether a document URL is archivable
//! before any network probe runs.

use url::Url;

/// Schemes that belong to the embedding browser or host platform and can
/// never be archived.
pub const UNSUPPORTED_PREFIXES: [&str; 8] = [
    "chrome://",
    "chrome-extension://",
    "edge://",
    "edge-extension://",
    "about:",
    "file://",
    "moz-extension://",
    "opera://",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlReason {
    /// The string does not parse as an absolute URL.
    Malformed,
    /// The URL parses but uses a scheme no archive provider accepts.
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlClass {
    Valid,
    Invalid(InvalidUrlReason),
}

/// Classify a candidate document URL.
///
/// `Valid` iff the string parses as an absolute URL with scheme `http` or
/// `https`. Browser-internal pages and every other scheme are
/// `Invalid(Unsupported)`; unparseable strings are `Invalid(Malformed)`.
pub fn classify(url: &str) -> UrlClass {
    if UNSUPPORTED_PREFIXES.iter().any(|p| url.starts_with(p)) {
        return UrlClass::Invalid(InvalidUrlReason::Unsupported);
    }

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => UrlClass::Valid,
        Ok(_) => UrlClass::Invalid(InvalidUrlReason::Unsupported),
        Err(_) => UrlClass::Invalid(InvalidUrlReason::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(classify("https://example.com"), UrlClass::Valid);
        assert_eq!(classify("http://example.com/a?b=c"), UrlClass::Valid);
    }

    #[test]
    fn rejects_browser_internal_pages() {
        for url in [
            "chrome://extensions",
            "chrome-extension://abcdef/popup.html",
            "edge://settings",
            "about:blank",
            "file:///etc/hosts",
            "moz-extension://abcdef/",
            "opera://start",
        ] {
            assert_eq!(
                classify(url),
                UrlClass::Invalid(InvalidUrlReason::Unsupported),
                "{url}"
            );
        }
    }

    #[test]
    fn rejects_non_web_schemes() {
        assert_eq!(
            classify("ftp://x"),
            UrlClass::Invalid(InvalidUrlReason::Unsupported)
        );
        assert_eq!(
            classify("mailto:someone@example.com"),
            UrlClass::Invalid(InvalidUrlReason::Unsupported)
        );
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(
            classify("not a url"),
            UrlClass::Invalid(InvalidUrlReason::Malformed)
        );
        assert_eq!(classify(""), UrlClass::Invalid(InvalidUrlReason::Malformed));
        // Relative paths are not absolute URLs.
        assert_eq!(
            classify("/just/a/path"),
            UrlClass::Invalid(InvalidUrlReason::Malformed)
        );
    }

    #[test]
    fn classification_is_deterministic() {
        for url in ["https://example.com", "ftp://x", "not a url"] {
            assert_eq!(classify(url), classify(url));
        }
    }
}
