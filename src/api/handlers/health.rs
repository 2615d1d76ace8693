//! Handler for the usage banner.

/// Static banner served on `/` and `/health`.
pub const RUNNING_MESSAGE: &str = "URL Shortener Service is running!\n\n\
Usage:\n\
  POST/GET /makeshort/<url>  - Shorten a URL\n\
  GET /<code> - Decode a short URL";

/// Returns the static usage banner with a `200` status.
pub fn health_handler() -> &'static str {
    RUNNING_MESSAGE
}
