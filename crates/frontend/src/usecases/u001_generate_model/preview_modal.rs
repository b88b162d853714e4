use super::view_model::GenerateModelVm;
use crate::shared::download::BrowserFileSaver;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Preview surface for the active model. Renders `<model-viewer>` once the
/// viewer is ready, a plain link until then or if the file cannot be shown.
#[component]
#[allow(non_snake_case)]
pub fn ModelPreview(vm: GenerateModelVm) -> impl IntoView {
    let on_close = Callback::new(move |_| vm.close_preview());

    move || {
        vm.preview.get().active().cloned().map(|target| {
            let url = target.url.clone();
            let filename = target.filename.clone();

            view! {
                <Modal title=format!("Preview: {}", filename) on_close=on_close>
                    <div class="model-preview">
                        {move || {
                            if vm.show_viewer() {
                                let failed_url = url.clone();
                                view! {
                                    <model-viewer
                                        src=url.clone()
                                        alt="Generated 3D model"
                                        camera-controls=""
                                        auto-rotate=""
                                        ar=""
                                        style="width: 100%; height: 420px;"
                                        on:error=move |_| vm.viewer_failed(&failed_url)
                                    ></model-viewer>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="model-preview__fallback">
                                        <p>"The 3D viewer is not available. Open or download the file instead:"</p>
                                        <a href=url.clone() target="_blank" rel="noopener">
                                            {icon("external-link")}
                                            " "
                                            {url.clone()}
                                        </a>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                    <Flex justify=FlexJustify::End style="margin-top: 12px;">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.download_active(&BrowserFileSaver)
                        >
                            {icon("download")}
                            " Download"
                        </Button>
                    </Flex>
                </Modal>
            }
        })
    }
}
