use crate::system::pages::landing::LandingPage;
use crate::usecases::u001_generate_model::GenerateModelView;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

/// Unknown paths go back to the landing page
#[component]
fn NotFound() -> impl IntoView {
    log::debug!("unknown route, redirecting to /");
    view! { <Redirect path="/" /> }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/generator") view=GenerateModelView />
                </Routes>
            </main>
        </Router>
    }
}
