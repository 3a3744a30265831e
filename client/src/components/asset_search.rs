//! Type-ahead asset search box with a suggestion menu.
//!
//! DESIGN
//! ======
//! Suggestions are recomputed from `CatalogState` on every keystroke. The box
//! stays disabled until a category is chosen.

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::catalog::{Asset, CatalogState};

#[component]
pub fn AssetSearch(state: RwSignal<CatalogState>, region: NodeRef<Div>) -> impl IntoView {
    let disabled = move || !state.with(CatalogState::search_input_enabled);
    let suggestions = move || state.with(|s| s.filtered().into_iter().copied().collect::<Vec<Asset>>());

    view! {
        <div class="catalog-field">
            <label class="catalog-field__label">
                <strong>"Asset"</strong>
            </label>
            <div class="dropdown" node_ref=region>
                <input
                    class="search-input"
                    class:search-input--disabled=disabled
                    type="text"
                    aria-label="Asset Search"
                    placeholder=move || state.with(CatalogState::search_placeholder)
                    prop:value=move || state.with(CatalogState::displayed_query)
                    disabled=disabled
                    on:focus=move |_| state.update(CatalogState::focus_search)
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.set_query(text));
                    }
                />
                <Show when=move || state.with(CatalogState::show_suggestions)>
                    <div class="dropdown__menu">
                        <For
                            each=suggestions
                            key=|asset| asset.id
                            children=move |asset: Asset| {
                                view! {
                                    <div
                                        class="dropdown__item"
                                        on:click=move |_| state.update(|s| s.pick_asset(&asset))
                                    >
                                        {asset.name}
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
                <Show when=move || state.with(CatalogState::show_no_match_hint)>
                    <div class="dropdown__hint">"No asset found"</div>
                </Show>
            </div>
        </div>
    }
}
