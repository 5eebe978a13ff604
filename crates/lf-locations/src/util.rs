use std::time::Duration;

/// Build the HTTP client used for lookups, bounded by `timeout`.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .timeout(timeout)
        .build()
}
