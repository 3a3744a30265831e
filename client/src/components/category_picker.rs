//! Category dropdown for the catalog page.

use leptos::html::Div;
use leptos::prelude::*;

use crate::state::catalog::{CatalogState, Category};

/// Toggle button plus menu of the three categories.
///
/// `region` marks the area that counts as "inside" for outside-press dismissal.
#[component]
pub fn CategoryPicker(state: RwSignal<CatalogState>, region: NodeRef<Div>) -> impl IntoView {
    view! {
        <div class="catalog-field">
            <label class="catalog-field__label">
                <strong>"Category"</strong>
            </label>
            <div class="dropdown" node_ref=region>
                <div
                    class="dropdown__toggle"
                    on:click=move |_| state.update(CatalogState::toggle_category_menu)
                >
                    {move || state.with(CatalogState::category_label)}
                </div>
                <Show when=move || state.with(|s| s.category_menu_open)>
                    <div class="dropdown__menu">
                        {Category::ALL
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <div
                                        class="dropdown__item"
                                        on:click=move |_| state.update(|s| s.select_category(category))
                                    >
                                        {category.label()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </div>
    }
}
