use super::api_utils::{api_base, build_api_base};

/// Public location of the `<model-viewer>` web component
pub const VIEWER_SCRIPT_URL: &str =
    "https://ajax.googleapis.com/ajax/libs/model-viewer/3.5.0/model-viewer.min.js";

/// Custom element tag registered by the viewer script
pub const VIEWER_ELEMENT: &str = "model-viewer";

/// How long the typing indicator lingers after a reply arrives (ms)
pub const TYPING_GRACE_MS: u32 = 600;

/// Application settings, provided to the component tree via context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub viewer_script_url: String,
    pub viewer_element: String,
    pub typing_grace_ms: u32,
}

impl AppConfig {
    /// Settings for the running page: service base derived from window location
    pub fn from_location() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: build_api_base("http:", "127.0.0.1"),
            viewer_script_url: VIEWER_SCRIPT_URL.to_string(),
            viewer_element: VIEWER_ELEMENT.to_string(),
            typing_grace_ms: TYPING_GRACE_MS,
        }
    }
}
