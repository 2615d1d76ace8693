//! Request path classification.
//!
//! Dispatch works on the raw request path, before any percent-decoding, so
//! shorten targets reach the handler exactly as the client sent them. The
//! HTTP method never participates in classification: the shorten route
//! accepts both GET and POST.

use regex::Regex;
use std::sync::LazyLock;

/// Everything after the `/makeshort/` prefix, however messy, is the target.
static SHORTEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/makeshort/(.+)$").unwrap());

/// A single final path segment of one or more alphanumeric characters.
static RESOLVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/([A-Za-z0-9]+)$").unwrap());

/// What a request path asks the service to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// `/makeshort/<target>` - shorten the captured remainder, still
    /// percent-encoded.
    Shorten { raw_target: String },
    /// `/<code>` - resolve an alphanumeric short code.
    Resolve { code: String },
    /// `/` or `/health` - serve the usage banner.
    Health,
    /// Anything else.
    Invalid,
}

/// Classifies a raw request path into a [`RouteDecision`].
///
/// The shorten pattern is tested first and takes precedence over the
/// others. The health paths are matched before the resolve pattern so that
/// `/health` serves the banner instead of resolving the literal code
/// `health`.
pub fn classify(path: &str) -> RouteDecision {
    if let Some(captures) = SHORTEN_RE.captures(path) {
        return RouteDecision::Shorten {
            raw_target: captures[1].to_string(),
        };
    }

    if path == "/" || path == "/health" {
        return RouteDecision::Health;
    }

    if let Some(captures) = RESOLVE_RE.captures(path) {
        return RouteDecision::Resolve {
            code: captures[1].to_string(),
        };
    }

    RouteDecision::Invalid
}
