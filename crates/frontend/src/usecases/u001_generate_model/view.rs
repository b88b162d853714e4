//! Generate Model - chat screen

use super::api::HttpGenerateClient;
use super::message_card::MessageCard;
use super::preview_modal::ModelPreview;
use super::view_model::GenerateModelVm;
use super::viewer::{BrowserViewerCapability, LoaderAction};
use crate::shared::config::AppConfig;
use crate::shared::download::{save_model, BrowserFileSaver};
use crate::shared::icons::icon;
use contracts::domain::a001_chat_message::ModelRef;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_generate_model::GenerateModel;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn GenerateModelView() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let vm = GenerateModelVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    let client = HttpGenerateClient::new(config.api_base.clone());
    let capability =
        BrowserViewerCapability::new(config.viewer_script_url.clone(), config.viewer_element.clone());
    let grace_ms = config.typing_grace_ms;

    // Scroll to the newest entry after every store mutation
    Effect::new(move |_| {
        vm.session.with(|s| s.store().revision());
        vm.session.with(|s| s.is_typing_visible());
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_| {
        let Some(submission) = vm.begin_submit() else {
            return;
        };
        log::info!("sending prompt ({} chars)", submission.prompt.len());
        spawn_local(vm.send(client.clone(), submission, grace_ms));
    });

    let handle_preview = Callback::new(move |(url, filename): ModelRef| {
        if vm.open_preview(&url, &filename, &capability) == LoaderAction::AwaitReady {
            let capability = capability.clone();
            spawn_local(async move {
                if capability.when_ready().await {
                    vm.mark_viewer_ready();
                }
            });
        }
    });

    let handle_download = Callback::new(move |(url, filename): ModelRef| {
        save_model(&BrowserFileSaver, &url, &filename);
    });

    view! {
        <div class="generator-page">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <Flex align=FlexAlign::Center style="gap: 16px;">
                    <a href="/" class="generator-page__home">"←"</a>
                    <h2 style="font-size: 18px; font-weight: bold;">{GenerateModel::display_name()}</h2>
                    <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                        {move || format!("Messages: {}", vm.session.with(|s| s.store().len()))}
                    </span>
                </Flex>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || vm.session.with(|s| s.store().is_empty()))
                    on_click=move |_| vm.clear()
                >
                    {icon("trash")}
                    " Clear"
                </Button>
            </Flex>

            <div node_ref=messages_container_ref class="chat-messages">
                <Show when=move || vm.session.with(|s| s.store().is_empty())>
                    <div class="chat-empty">
                        <p>{GenerateModel::description()}</p>
                        <p style="color: var(--colorNeutralForeground3);">
                            "Try: \"a 40 mm cube with a 10 mm hole through the middle\""
                        </p>
                    </div>
                </Show>

                <For
                    each=move || vm.session.with(|s| s.messages().to_vec())
                    key=|msg| msg.id()
                    let:msg
                >
                    <MessageCard message=msg on_preview=handle_preview on_download=handle_download />
                </For>

                <Show when=move || vm.is_typing()>
                    <div class="chat-row chat-row--bot">
                        <div class="chat-bubble chat-bubble--bot chat-typing">
                            <Spinner />
                            " Generating…"
                        </div>
                    </div>
                </Show>
            </div>

            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.input
                        placeholder="Describe the object to generate… (Enter to send, Shift+Enter for a new line)"
                        attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.can_submit())
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    {move || if vm.is_in_flight() { " Sending..." } else { " Send" }}
                </Button>
            </Flex>

            <ModelPreview vm=vm />
        </div>
    }
}
