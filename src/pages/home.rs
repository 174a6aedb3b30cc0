//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div id="page-home">
            <div class="content">
                <header>
                    <img src="/assets/logo.svg" alt="Ecoleta" />
                </header>
                <main>
                    <h1>"Seu marketplace de coleta de resíduos."</h1>
                    <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>
                    <A href="/create-point">
                        <strong>"Cadastre um ponto de coleta"</strong>
                    </A>
                </main>
            </div>
        </div>
    }
}
