//! API utilities for talking to the generation service
//!
//! Provides helper functions for constructing service URLs.

/// Port the generation service listens on
pub const SERVICE_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`SERVICE_PORT`] for the generation service.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://example.com:8000"
/// - "http://127.0.0.1:8000" if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return build_api_base("http:", "127.0.0.1"),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_api_base(&protocol, &hostname)
}

/// Join a location protocol ("https:") and host name into the service base URL
pub fn build_api_base(protocol: &str, hostname: &str) -> String {
    let hostname = if hostname.is_empty() {
        "127.0.0.1"
    } else {
        hostname
    };
    format!("{}//{}:{}", protocol, hostname, SERVICE_PORT)
}

/// Build a full API URL from a base and a path
///
/// # Example
/// ```rust
/// let url = frontend::shared::api_utils::api_url("http://localhost:8000/", "/chat");
/// assert_eq!(url, "http://localhost:8000/chat");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
