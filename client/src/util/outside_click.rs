//! Detect pointer presses outside a set of page regions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Menus close when the user presses anywhere outside them. The listener is
//! bound to `pointerdown`, which the browser dispatches before `click`, so a
//! menu never closes underneath its own item's click handler.

use leptos::html::Div;
use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Report, for every `pointerdown` on the page, whether it landed inside each
/// of `regions`. The listener lives as long as the calling component.
///
/// An unmounted region always reports `true`, so it is never dismissed.
pub fn on_pointer_down<const N: usize, F>(regions: [NodeRef<Div>; N], handler: F)
where
    F: Fn([bool; N]) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::pointerdown, move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = regions.map(|region| match region.get_untracked() {
                Some(el) => target.as_ref().is_some_and(|node| el.contains(Some(node))),
                None => true,
            });
            handler(inside);
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (regions, handler);
    }
}
