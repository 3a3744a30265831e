//! Detail page header: asset image, name and id.

use leptos::prelude::*;

use crate::util::route::{asset_image_path, image_fallback};

/// The image falls back to the default picture once if its own file is missing.
#[component]
pub fn AssetHeader(name: String, id: u32) -> impl IntoView {
    let src = RwSignal::new(asset_image_path(&name));
    let alt = name.clone();
    let on_error = move |_| {
        if let Some(fallback) = image_fallback(&src.get_untracked()) {
            src.set(fallback.to_owned());
        }
    };

    view! {
        <header class="asset-header">
            <img class="asset-header__image" src=move || src.get() alt=alt on:error=on_error/>
            <div class="asset-header__text">
                <h1 class="asset-header__name">{name}</h1>
                <p class="asset-header__id">"Asset ID: " {id}</p>
            </div>
        </header>
    }
}
