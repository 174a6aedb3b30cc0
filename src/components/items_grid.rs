//! Items Grid Component
//!
//! Collectible categories; clicking one toggles it in the selection.

use leptos::prelude::*;

use ecoleta_core::{Item, ItemSelection};

#[component]
pub fn ItemsGrid(
    #[prop(into)] items: Signal<Vec<Item>>,
    #[prop(into)] selected: Signal<ItemSelection>,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    view! {
        <ul class="items-grid">
            <For
                each=move || items.get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let is_selected = move || selected.with(|s| s.contains(id));
                    view! {
                        <li
                            class=move || if is_selected() { "selected" } else { "" }
                            on:click=move |_| on_toggle.run(id)
                        >
                            <img src=item.image_url.clone() alt=item.title.clone() />
                            <span>{item.title.clone()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
