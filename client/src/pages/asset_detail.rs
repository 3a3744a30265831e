//! Asset detail page: six on-demand information fetches for one asset.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached at `/assets/{name}/{id}`. Each button issues one GET and the reply
//! replaces the single panel slot. Nothing is fetched on mount.
//!
//! DESIGN
//! ======
//! Fetches are independent and never cancelled; see `state::detail` for the
//! last-write-wins rule on the panel slot.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::asset_header::AssetHeader;
use crate::components::detail_panel::DetailPanel;
use crate::net::types::Endpoint;
use crate::state::detail::DetailState;
use crate::util::route::{AssetRef, parse_asset_ref};

/// Detail route entry; renders a not-found message when parameters are missing.
#[component]
pub fn AssetDetailPage() -> impl IntoView {
    let params = use_params_map();
    let asset = move || params.with(|p| parse_asset_ref(p.get("name"), p.get("id")));

    view! {
        <div class="detail-page">
            {move || match asset() {
                Some(asset) => view! { <AssetDetail asset=asset/> }.into_any(),
                None => view! { <p class="detail-page__not-found">"Asset not found."</p> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AssetDetail(asset: AssetRef) -> impl IntoView {
    let detail = RwSignal::new(DetailState::default());
    let navigate = use_navigate();
    let id = asset.id;

    let fetch = move |endpoint: Endpoint| {
        detail.update(|d| d.begin(endpoint));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_detail(endpoint, id).await;
            if let Err(err) = &result {
                log::error!("{endpoint} fetch for asset {id} failed: {err}");
            }
            // The page may be gone by the time the reply lands.
            let _ = detail.try_update(|d| d.finish(result));
        });
    };

    view! {
        <AssetHeader name=asset.name id=id/>

        <nav class="detail-page__actions">
            {Endpoint::ALL
                .into_iter()
                .map(|endpoint| {
                    view! {
                        <button
                            class="btn detail-page__action"
                            class:detail-page__action--active=move || {
                                detail.with(|d| d.requested == Some(endpoint))
                            }
                            on:click=move |_| fetch(endpoint)
                        >
                            {endpoint.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>

        <Show when=move || detail.with(|d| d.loading)>
            <p class="detail-page__loading">"Loading..."</p>
        </Show>

        <Show when=move || detail.with(|d| d.error.is_some())>
            <div class="detail-page__error" role="alert">
                <span>{move || detail.with(|d| d.error.clone().unwrap_or_default())}</span>
                <button
                    class="detail-page__error-dismiss"
                    on:click=move |_| detail.update(DetailState::dismiss_error)
                    aria-label="Dismiss error"
                >
                    "✕"
                </button>
            </div>
        </Show>

        {move || detail.with(|d| d.response.clone()).map(|response| view! { <DetailPanel response=response/> })}

        <button class="btn detail-page__back" on:click=move |_| navigate("/", NavigateOptions::default())>
            "Back to Home"
        </button>
    }
}
