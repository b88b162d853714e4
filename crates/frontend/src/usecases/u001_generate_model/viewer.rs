//! Lazy loading of the 3D viewer web component

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlScriptElement;

const LOADER_MARKER: &str = "data-viewer-loader";

/// Availability of the viewer in the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityState {
    Absent,
    Loading,
    Ready,
}

/// Source of the viewer capability (the browser, or a fake in tests)
pub trait ViewerCapability {
    fn state(&self) -> CapabilityState;
    /// Start loading; returns without waiting for completion
    fn begin_load(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderState {
    #[default]
    Unloaded,
    LoadingCapability,
    Ready,
}

/// What the caller should do after [`ViewerLoader::request`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderAction {
    None,
    /// A load was started by this request; wait for readiness once
    AwaitReady,
}

/// Makes sure the viewer is requested at most once per session.
///
/// `Unloaded -> LoadingCapability -> Ready`, or straight to `Ready` when the
/// capability is already there. A load that never finishes keeps the loader in
/// `LoadingCapability`; callers show the plain link meanwhile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewerLoader {
    state: LoaderState,
}

impl ViewerLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoaderState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoaderState::Ready
    }

    /// Called whenever a preview opens. Never blocks.
    pub fn request<P: ViewerCapability + ?Sized>(&mut self, provider: &P) -> LoaderAction {
        match self.state {
            LoaderState::Ready => LoaderAction::None,
            LoaderState::LoadingCapability => {
                if provider.state() == CapabilityState::Ready {
                    self.state = LoaderState::Ready;
                }
                LoaderAction::None
            }
            LoaderState::Unloaded => match provider.state() {
                CapabilityState::Ready => {
                    self.state = LoaderState::Ready;
                    LoaderAction::None
                }
                CapabilityState::Loading => {
                    self.state = LoaderState::LoadingCapability;
                    LoaderAction::AwaitReady
                }
                CapabilityState::Absent => {
                    if let Err(e) = provider.begin_load() {
                        log::warn!("viewer load could not start: {}", e);
                    }
                    self.state = LoaderState::LoadingCapability;
                    LoaderAction::AwaitReady
                }
            },
        }
    }

    pub fn mark_ready(&mut self) {
        self.state = LoaderState::Ready;
    }
}

/// The `<model-viewer>` custom element, loaded from a public CDN
#[derive(Debug, Clone)]
pub struct BrowserViewerCapability {
    script_url: String,
    element: String,
}

impl BrowserViewerCapability {
    pub fn new(script_url: impl Into<String>, element: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
            element: element.into(),
        }
    }

    fn is_registered(&self) -> bool {
        web_sys::window()
            .map(|w| !w.custom_elements().get(&self.element).is_undefined())
            .unwrap_or(false)
    }

    fn script_present(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("script[{}]", LOADER_MARKER))
                    .ok()
                    .flatten()
            })
            .is_some()
    }

    /// Resolves once the element is registered; `false` if that cannot be observed
    pub async fn when_ready(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = match window.custom_elements().when_defined(&self.element) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("whenDefined({}) failed: {:?}", self.element, e);
                return false;
            }
        };
        match JsFuture::from(promise).await {
            Ok(_) => {
                log::info!("viewer <{}> is ready", self.element);
                true
            }
            Err(e) => {
                log::warn!("viewer <{}> never became ready: {:?}", self.element, e);
                false
            }
        }
    }
}

impl ViewerCapability for BrowserViewerCapability {
    fn state(&self) -> CapabilityState {
        if self.is_registered() {
            CapabilityState::Ready
        } else if self.script_present() {
            CapabilityState::Loading
        } else {
            CapabilityState::Absent
        }
    }

    fn begin_load(&self) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window object")?;
        let document = window.document().ok_or("No document object")?;

        let script = document
            .create_element("script")
            .map_err(|e| format!("Failed to create script: {:?}", e))?
            .dyn_into::<HtmlScriptElement>()
            .map_err(|e| format!("Failed to cast to script: {:?}", e))?;
        script.set_type("module");
        script.set_src(&self.script_url);
        script
            .set_attribute(LOADER_MARKER, "1")
            .map_err(|e| format!("Failed to mark script: {:?}", e))?;

        document
            .head()
            .ok_or("No head element")?
            .append_child(&script)
            .map_err(|e| format!("Failed to append script: {:?}", e))?;

        log::info!("loading viewer from {}", self.script_url);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeCapability;
    use super::*;

    #[test]
    fn test_already_present_goes_straight_to_ready() {
        let provider = FakeCapability::new(CapabilityState::Ready);
        let mut loader = ViewerLoader::new();
        assert_eq!(loader.request(&provider), LoaderAction::None);
        assert!(loader.is_ready());
        assert_eq!(provider.loads.get(), 0);
    }

    #[test]
    fn test_absent_starts_one_load() {
        let provider = FakeCapability::new(CapabilityState::Absent);
        let mut loader = ViewerLoader::new();
        assert_eq!(loader.request(&provider), LoaderAction::AwaitReady);
        assert_eq!(loader.state(), LoaderState::LoadingCapability);
        assert_eq!(provider.loads.get(), 1);
    }

    #[test]
    fn test_repeated_requests_load_at_most_once() {
        let provider = FakeCapability::new(CapabilityState::Absent);
        let mut loader = ViewerLoader::new();
        loader.request(&provider);
        assert_eq!(loader.request(&provider), LoaderAction::None);
        assert_eq!(loader.request(&provider), LoaderAction::None);
        assert_eq!(provider.loads.get(), 1);

        loader.mark_ready();
        loader.request(&provider);
        assert_eq!(provider.loads.get(), 1);
    }

    #[test]
    fn test_loading_elsewhere_is_not_restarted() {
        let provider = FakeCapability::new(CapabilityState::Loading);
        let mut loader = ViewerLoader::new();
        assert_eq!(loader.request(&provider), LoaderAction::AwaitReady);
        assert_eq!(provider.loads.get(), 0);
    }

    #[test]
    fn test_later_request_picks_up_readiness() {
        let provider = FakeCapability::new(CapabilityState::Absent);
        let mut loader = ViewerLoader::new();
        loader.request(&provider);
        provider.state.set(CapabilityState::Ready);
        loader.request(&provider);
        assert!(loader.is_ready());
    }

    #[test]
    fn test_failed_load_stays_loading() {
        struct Blocked;
        impl ViewerCapability for Blocked {
            fn state(&self) -> CapabilityState {
                CapabilityState::Absent
            }
            fn begin_load(&self) -> Result<(), String> {
                Err("blocked by policy".into())
            }
        }

        let mut loader = ViewerLoader::new();
        loader.request(&Blocked);
        loader.request(&Blocked);
        assert_eq!(loader.state(), LoaderState::LoadingCapability);
        assert!(!loader.is_ready());
    }
}
