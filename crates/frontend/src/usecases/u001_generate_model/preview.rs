/// Model shown in the preview surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTarget {
    pub url: String,
    pub filename: String,
    failed: bool,
}

impl PreviewTarget {
    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

/// Open/closed state of the preview surface
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    target: Option<PreviewTarget>,
}

impl PreviewState {
    /// Show `url`, replacing whatever was shown before
    pub fn open(&mut self, url: impl Into<String>, filename: impl Into<String>) {
        self.target = Some(PreviewTarget {
            url: url.into(),
            filename: filename.into(),
            failed: false,
        });
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    /// The viewer could not display `url`; ignored if another model is shown by now
    pub fn mark_failed(&mut self, url: &str) {
        if let Some(target) = self.target.as_mut().filter(|t| t.url == url) {
            target.failed = true;
        }
    }

    pub fn active(&self) -> Option<&PreviewTarget> {
        self.target.as_ref()
    }

    /// Render the 3D viewer (true) or the plain link fallback (false)
    pub fn show_viewer(&self, viewer_ready: bool) -> bool {
        viewer_ready && self.target.as_ref().is_some_and(|t| !t.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut preview = PreviewState::default();
        assert!(preview.active().is_none());
        preview.open("https://x/y.stl", "model.stl");
        assert_eq!(preview.active().map(|t| t.url.as_str()), Some("https://x/y.stl"));
        preview.close();
        assert!(preview.active().is_none());
    }

    #[test]
    fn test_reopen_shows_only_new_target() {
        let mut preview = PreviewState::default();
        preview.open("https://x/old.stl", "model.stl");
        preview.mark_failed("https://x/old.stl");
        preview.close();
        preview.open("https://x/new.stl", "new.stl");

        let active = preview.active().unwrap();
        assert_eq!(active.url, "https://x/new.stl");
        assert_eq!(active.filename, "new.stl");
        assert!(!active.has_failed());
    }

    #[test]
    fn test_open_replaces_without_close() {
        let mut preview = PreviewState::default();
        preview.open("https://x/a.stl", "model.stl");
        preview.open("https://x/b.stl", "model.stl");
        assert_eq!(preview.active().unwrap().url, "https://x/b.stl");
    }

    #[test]
    fn test_viewer_needs_capability_and_healthy_target() {
        let mut preview = PreviewState::default();
        assert!(!preview.show_viewer(true));

        preview.open("https://x/y.stl", "model.stl");
        assert!(!preview.show_viewer(false));
        assert!(preview.show_viewer(true));

        preview.mark_failed("https://x/y.stl");
        assert!(!preview.show_viewer(true));
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut preview = PreviewState::default();
        preview.open("https://x/new.stl", "model.stl");
        preview.mark_failed("https://x/old.stl");
        assert!(preview.show_viewer(true));
    }
}
