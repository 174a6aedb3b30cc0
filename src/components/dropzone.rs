//! Dropzone Component
//!
//! Click-or-drop image picker with a preview of the chosen file.

use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

use ecoleta_core::form::is_image_type;
use crate::browser;

/// Image picker; reports each accepted file through `on_file_picked`.
/// The preview and the reported file always change together.
#[component]
pub fn Dropzone(
    #[prop(into)] on_file_picked: Callback<File>,
) -> impl IntoView {
    let (preview_url, set_preview_url) = signal(None::<String>);
    let (is_over, set_is_over) = signal(false);

    let accept = move |file: File| {
        if !is_image_type(&file.type_()) {
            log::warn!("[Dropzone] Ignoring {} ({})", file.name(), file.type_());
            return;
        }
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                if let Some(old) = preview_url.get_untracked() {
                    let _ = web_sys::Url::revoke_object_url(&old);
                }
                set_preview_url.set(Some(url));
            }
            Err(e) => log::warn!("[Dropzone] No preview: {}", browser::describe_js_error(&e)),
        }
        on_file_picked.run(file);
    };

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            accept(file);
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept(file);
        }
    };

    view! {
        <div
            class=move || if is_over.get() { "dropzone active" } else { "dropzone" }
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <input type="file" accept="image/*" on:change=on_change />
            {move || match preview_url.get() {
                Some(url) => view! { <img src=url alt="Point thumbnail" /> }.into_any(),
                None => view! {
                    <p>
                        <img src="/assets/upload.svg" alt="" />
                        "Imagem do estabelecimento"
                    </p>
                }.into_any(),
            }}
        </div>
    }
}
