//! Create Point Page
//!
//! Registration form: entity details, address picked on the map, and the
//! collectible item categories. Posts everything as multipart on submit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;
use web_sys::HtmlInputElement;

use ecoleta_core::{session, Position};
use crate::browser::{BrowserLocator, PickedFile, RouterNavigator};
use crate::components::{CitySelect, Dropzone, ItemsGrid, MapPicker, UfSelect};
use crate::context::use_app_context;
use crate::store::{
    store_apply_cities, store_apply_initial_position, store_apply_items, store_apply_ufs,
    CreatePointState, CreatePointStateStoreFields, CreatePointStore,
};

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_app_context();
    let store: CreatePointStore = Store::new(CreatePointState::default());
    let navigate = use_navigate();
    // Picked image file, read on submit
    let picked = StoredValue::new_local(None::<web_sys::File>);

    // Center the map on the user
    Effect::new(move |_| {
        spawn_local(async move {
            store_apply_initial_position(&store, session::locate(&BrowserLocator).await);
        });
    });

    Effect::new(move |_| {
        let api = ctx.collection();
        spawn_local(async move {
            store_apply_items(&store, session::load_items(&api).await);
        });
    });

    Effect::new(move |_| {
        let geo = ctx.geography();
        spawn_local(async move {
            store_apply_ufs(&store, session::load_ufs(&geo).await);
        });
    });

    // Only the UF drives the city fetch, not every keystroke
    let selected_uf = Memo::new(move |_| store.form().read().selected_uf.clone());
    Effect::new(move |_| {
        let uf = selected_uf.get();
        let geo = ctx.geography();
        spawn_local(async move {
            if let Some(loaded) = session::load_cities(&geo, &uf).await.transpose() {
                store_apply_cities(&store, loaded, &uf);
            }
        });
    });

    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        store.form().write().set_field(&input.name(), input.value());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = store.form().get_untracked();
        let image = picked.get_value().map(PickedFile);
        let api = ctx.collection();
        let navigator = RouterNavigator::new(navigate.clone());
        spawn_local(async move {
            if let Err(e) = session::submit_with_image(&api, &navigator, form, image.as_ref()).await {
                log::error!("[CreatePoint] Submitting point: {}", e);
            }
        });
    };

    let items = Memo::new(move |_| store.items().get());
    let ufs = Memo::new(move |_| store.ufs().get());
    let cities = Memo::new(move |_| store.cities().get());
    let initial_position = Memo::new(move |_| store.initial_position().get());
    let selected_position = Memo::new(move |_| store.form().read().selected_position);
    let selected_items = Memo::new(move |_| store.form().read().selected_items.clone());

    view! {
        <div id="page-create-point">
            <header>
                <img src="/assets/logo.svg" alt="Ecoleta" />
                <A href="/">"Voltar para Home"</A>
            </header>

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> " ponto de coleta"</h1>

                <Dropzone on_file_picked=move |file: web_sys::File| picked.set_value(Some(file)) />

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>

                    <div class="field">
                        <label for="name">"Nome da entidade"</label>
                        <input type="text" name="name" id="name" on:input=on_input />
                    </div>

                    <div class="field-group">
                        <div class="field">
                            <label for="email">"E-mail"</label>
                            <input type="email" name="email" id="email" on:input=on_input />
                        </div>

                        <div class="field">
                            <label for="whatsapp">"Whatsapp"</label>
                            <input type="text" name="whatsapp" id="whatsapp" on:input=on_input />
                        </div>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <MapPicker
                        center=initial_position
                        marker=selected_position
                        on_click=move |position: Position| store.form().write().click_map(position)
                    />

                    <div class="field-group">
                        <UfSelect
                            ufs=ufs
                            selected=selected_uf
                            on_select=move |uf: String| store.form().write().select_uf(uf)
                        />
                        <CitySelect
                            cities=cities
                            on_select=move |city: String| store.form().write().select_city(city)
                        />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Itens de coleta"</h2>
                        <span>"Selecione um ou mais itens abaixo"</span>
                    </legend>

                    <ItemsGrid
                        items=items
                        selected=selected_items
                        on_toggle=move |id: u32| store.form().write().toggle_item(id)
                    />
                </fieldset>

                <button type="submit">"Cadastrar Ponto de Coleta"</button>
            </form>
        </div>
    }
}
