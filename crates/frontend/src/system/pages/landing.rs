use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u001_generate_model::GenerateModel;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-container">
            <div class="landing-box">
                <h1>{GenerateModel::display_name()}</h1>
                <h2>{GenerateModel::description()}</h2>

                <ul class="landing-steps">
                    <li>"Describe the part you need in a sentence or two"</li>
                    <li>"Inspect the generated model right in the browser"</li>
                    <li>"Download the STL file and send it to your printer"</li>
                </ul>

                <A href="/generator" attr:class="btn-primary">
                    "Start generating "
                    {icon("arrow-right")}
                </A>
            </div>
        </div>
    }
}
