//! Generate Model - View Model

use super::api::GenerateClient;
use super::preview::PreviewState;
use super::session::{dispatch, ChatSession, DispatchOutcome, SessionHandle, Submission};
use super::viewer::{LoaderAction, ViewerCapability, ViewerLoader};
use crate::shared::download::{save_model, FileSaver};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct GenerateModelVm {
    pub session: RwSignal<ChatSession>,
    pub input: RwSignal<String>,
    pub preview: RwSignal<PreviewState>,
    pub viewer: RwSignal<ViewerLoader>,
}

impl GenerateModelVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(ChatSession::new()),
            input: RwSignal::new(String::new()),
            preview: RwSignal::new(PreviewState::default()),
            viewer: RwSignal::new(ViewerLoader::new()),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.session.with(|s| s.is_in_flight())
    }

    pub fn is_typing(&self) -> bool {
        self.session.with(|s| s.is_typing_visible())
    }

    pub fn can_submit(&self) -> bool {
        let input = self.input.get();
        self.session.with(|s| s.validate(&input).is_ok())
    }

    /// Accept the current input. On success the input box is cleared.
    pub fn begin_submit(&self) -> Option<Submission> {
        let input = self.input.get_untracked();
        match self.session.try_update(|s| s.submit(&input))? {
            Ok(submission) => {
                self.input.set(String::new());
                Some(submission)
            }
            Err(reason) => {
                log::debug!("submission rejected: {:?}", reason);
                None
            }
        }
    }

    /// Send an accepted submission, then hide the typing indicator after `grace_ms`
    pub async fn send<C: GenerateClient>(self, client: C, submission: Submission, grace_ms: u32) {
        if let DispatchOutcome::Completed(ticket) = dispatch(&self.session, &client, submission).await {
            gloo_timers::future::TimeoutFuture::new(grace_ms).await;
            self.session.with_session(|s| s.clear_typing(ticket));
        }
    }

    pub fn clear(&self) {
        self.session.update(|s| s.clear());
    }

    /// Open the preview for `url` and make sure the viewer is on its way
    pub fn open_preview<P: ViewerCapability + ?Sized>(
        &self,
        url: &str,
        filename: &str,
        provider: &P,
    ) -> LoaderAction {
        self.preview.update(|p| p.open(url, filename));
        self.viewer
            .try_update(|v| v.request(provider))
            .unwrap_or(LoaderAction::None)
    }

    pub fn close_preview(&self) {
        self.preview.update(|p| p.close());
    }

    pub fn mark_viewer_ready(&self) {
        self.viewer.update(|v| v.mark_ready());
    }

    pub fn viewer_failed(&self, url: &str) {
        log::warn!("viewer could not display {}", url);
        self.preview.update(|p| p.mark_failed(url));
    }

    pub fn show_viewer(&self) -> bool {
        let ready = self.viewer.with(|v| v.is_ready());
        self.preview.with(|p| p.show_viewer(ready))
    }

    /// Download the model currently shown in the preview
    pub fn download_active<S: FileSaver + ?Sized>(&self, saver: &S) {
        if let Some(target) = self.preview.with_untracked(|p| p.active().cloned()) {
            save_model(saver, &target.url, &target.filename);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::download::testing::RecordingSaver;
    use crate::usecases::u001_generate_model::viewer::testing::FakeCapability;
    use crate::usecases::u001_generate_model::viewer::CapabilityState;

    #[test]
    fn test_begin_submit_clears_input() {
        Owner::new().with(|| {
            let vm = GenerateModelVm::new();
            vm.input.set("  a phone stand ".into());
            assert!(vm.can_submit());

            let submission = vm.begin_submit().unwrap();
            assert_eq!(submission.prompt, "a phone stand");
            assert_eq!(vm.input.get_untracked(), "");
            assert!(vm.is_in_flight());
            assert!(vm.is_typing());
            assert_eq!(vm.session.with_untracked(|s| s.messages().len()), 1);
        });
    }

    #[test]
    fn test_begin_submit_rejects_while_busy() {
        Owner::new().with(|| {
            let vm = GenerateModelVm::new();
            vm.input.set("first".into());
            vm.begin_submit().unwrap();

            vm.input.set("second".into());
            assert!(!vm.can_submit());
            assert!(vm.begin_submit().is_none());
            assert_eq!(vm.input.get_untracked(), "second");
            assert_eq!(vm.session.with_untracked(|s| s.messages().len()), 1);
        });
    }

    #[test]
    fn test_preview_twice_loads_viewer_once() {
        Owner::new().with(|| {
            let vm = GenerateModelVm::new();
            let provider = FakeCapability::new(CapabilityState::Absent);

            assert_eq!(
                vm.open_preview("https://x/a.stl", "model.stl", &provider),
                LoaderAction::AwaitReady
            );
            vm.close_preview();
            assert_eq!(
                vm.open_preview("https://x/a.stl", "model.stl", &provider),
                LoaderAction::None
            );
            assert_eq!(provider.loads.get(), 1);
            assert!(!vm.show_viewer());

            vm.mark_viewer_ready();
            assert!(vm.show_viewer());
        });
    }

    #[test]
    fn test_reopen_with_new_reference() {
        Owner::new().with(|| {
            let vm = GenerateModelVm::new();
            let provider = FakeCapability::new(CapabilityState::Ready);

            vm.open_preview("https://x/old.stl", "model.stl", &provider);
            vm.close_preview();
            assert!(vm.preview.with_untracked(|p| p.active().is_none()));

            vm.open_preview("https://x/new.stl", "model.stl", &provider);
            let url = vm
                .preview
                .with_untracked(|p| p.active().map(|t| t.url.clone()));
            assert_eq!(url.as_deref(), Some("https://x/new.stl"));
        });
    }

    #[test]
    fn test_viewer_failure_falls_back_to_link() {
        Owner::new().with(|| {
            let vm = GenerateModelVm::new();
            let provider = FakeCapability::new(CapabilityState::Ready);
            vm.open_preview("https://x/y.stl", "model.stl", &provider);
            assert!(vm.show_viewer());

            vm.viewer_failed("https://x/y.stl");
            assert!(!vm.show_viewer());
        });
    }

    #[test]
    fn test_download_active_target() {
        Owner::new().with(|| {
            let vm = GenerateModelVm::new();
            let saver = RecordingSaver::default();

            vm.download_active(&saver);
            assert!(saver.saved.borrow().is_empty());

            let provider = FakeCapability::new(CapabilityState::Ready);
            vm.open_preview("https://x/y.stl", "model.stl", &provider);
            vm.download_active(&saver);
            assert_eq!(
                saver.saved.borrow().as_slice(),
                &[("https://x/y.stl".to_string(), "model.stl".to_string())]
            );
        });
    }

    #[test]
    fn test_clear_empties_conversation() {
        Owner::new().with(|| {
            let vm = GenerateModelVm::new();
            vm.input.set("cube".into());
            vm.begin_submit();
            vm.clear();
            assert!(vm.session.with_untracked(|s| s.messages().is_empty()));
            assert!(vm.is_in_flight());
        });
    }
}
