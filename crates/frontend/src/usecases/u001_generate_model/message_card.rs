use crate::shared::date_utils::{format_datetime, format_time, to_local};
use crate::shared::icons::icon;
use contracts::domain::a001_chat_message::{ChatMessage, ModelRef};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn MessageCard(
    message: ChatMessage,
    on_preview: Callback<ModelRef>,
    on_download: Callback<ModelRef>,
) -> impl IntoView {
    let role = message.role().as_str();
    let local = to_local(message.timestamp());
    let time = format_time(&local);
    let full_time = format_datetime(&local);
    let text = message.text().to_string();
    let image = message.image().map(str::to_string);
    let model = message.model_ref();

    view! {
        <div class=format!("chat-row chat-row--{}", role)>
            <div class=format!("chat-bubble chat-bubble--{}", role)>
                {(!text.is_empty())
                    .then(|| view! { <div style="white-space: pre-wrap;">{text}</div> })}

                {image.map(|src| {
                    view! {
                        <img class="chat-image" src=src alt="Rendered preview" loading="lazy" />
                    }
                })}

                {model.map(|model| {
                    let preview_ref = model.clone();
                    let download_ref = model.clone();
                    view! {
                        <Flex style="gap: 8px; margin-top: 8px;">
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| on_preview.run(preview_ref.clone())
                            >
                                {icon("cube")}
                                " Preview"
                            </Button>
                            <Button
                                size=ButtonSize::Small
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| on_download.run(download_ref.clone())
                            >
                                {icon("download")}
                                " Download"
                            </Button>
                        </Flex>
                    }
                })}

                <div class="chat-time" title=full_time>{time}</div>
            </div>
        </div>
    }
}
