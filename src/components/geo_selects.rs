//! UF and City Selects
//!
//! The UF select is value-bound; the city select is not, so a stale city
//! stays selected in state after the UF changes.

use leptos::prelude::*;

use ecoleta_core::UNSELECTED;

#[component]
pub fn UfSelect(
    #[prop(into)] ufs: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for="uf">"Estado (UF)"</label>
            <select
                name="uf"
                id="uf"
                prop:value=move || selected.get()
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                <option value=UNSELECTED>"Selecione uma UF"</option>
                <For
                    each=move || ufs.get()
                    key=|uf| uf.clone()
                    children=move |uf| view! { <option value=uf.clone()>{uf.clone()}</option> }
                />
            </select>
        </div>
    }
}

#[component]
pub fn CitySelect(
    #[prop(into)] cities: Signal<Vec<String>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for="city">"Cidade"</label>
            <select
                name="city"
                id="city"
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                <option value=UNSELECTED>"Selecione uma Cidade"</option>
                <For
                    each=move || cities.get()
                    key=|city| city.clone()
                    children=move |city| view! { <option value=city.clone()>{city.clone()}</option> }
                />
            </select>
        </div>
    }
}
