//! Ecoleta Frontend App
//!
//! Root component: shared API clients and the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::context::{config_from_env, AppContext, AppServices};
use crate::pages::{CreatePoint, Home};

#[component]
pub fn App() -> impl IntoView {
    let config = config_from_env();
    log::info!("[APP] API at {}, IBGE at {}", config.api_url, config.ibge_url);

    // Provide context to all children
    provide_context(AppContext::new(AppServices::new(config)));

    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Página não encontrada."</p> }>
                <Route path=path!("/") view=Home />
                <Route path=path!("/create-point") view=CreatePoint />
            </Routes>
        </Router>
    }
}
