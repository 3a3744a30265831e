//! Catalog page: pick a category, find an asset, open its detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Its `CatalogState` lives in the page, so
//! coming back from a detail page starts from a clean selection.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::asset_search::AssetSearch;
use crate::components::category_picker::CategoryPicker;
use crate::state::catalog::{CatalogState, SearchOutcome};
use crate::util::notify;
use crate::util::outside_click::on_pointer_down;

/// Notice shown when Search finds no exact match.
pub const NO_ASSET_FOUND: &str = "No asset found";

#[component]
pub fn CatalogPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::default());
    let category_region = NodeRef::<Div>::new();
    let asset_region = NodeRef::<Div>::new();
    let navigate = use_navigate();

    on_pointer_down([category_region, asset_region], move |[inside_category, inside_asset]| {
        state.update(|s| s.pointer_down_outside(inside_category, inside_asset));
    });

    let on_search = move |_| match state.with_untracked(CatalogState::resolve_search) {
        SearchOutcome::Navigate(path) => navigate(&path, NavigateOptions::default()),
        SearchOutcome::NotFound => notify::alert(NO_ASSET_FOUND),
    };

    view! {
        <div class="catalog-page">
            <video class="catalog-page__video" autoplay=true muted=true playsinline=true>
                <source src="/videos/bg.mp4" type="video/mp4"/>
            </video>

            <div class="catalog-page__content">
                <h1 class="catalog-page__title">"Welcome to the Robotic Assets Directory!"</h1>
                <p class="catalog-page__intro">
                    "Explore a variety of robotic assets tailored to industrial, medical, and military sectors. "
                    "Select a category to view available assets."
                </p>

                <CategoryPicker state=state region=category_region/>
                <AssetSearch state=state region=asset_region/>

                <div class="catalog-page__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || !state.with(CatalogState::search_enabled)
                        on:click=on_search
                    >
                        "Search"
                    </button>
                </div>
            </div>
        </div>
    }
}
