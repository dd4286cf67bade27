//! Status banner for the active view.

use dioxus::prelude::*;

use crate::app::store::use_store;
use crate::state::Tone;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "bg-green-50 text-green-800 border-green-300",
        Tone::Info => "bg-blue-50 text-blue-800 border-blue-300",
        Tone::Warning => "bg-yellow-50 text-yellow-800 border-yellow-300",
        Tone::Error => "bg-red-50 text-red-800 border-red-300",
    }
}

/// Renders the current banner, if any.
#[component]
pub fn StatusBanner() -> Element {
    let store = use_store();
    let banner = store.state.read().banner.clone();

    match banner {
        Some(banner) => rsx! {
            div {
                class: "border rounded-lg px-4 py-3 text-sm {tone_class(banner.tone)}",
                role: if banner.is_error() { "alert" } else { "status" },
                "{banner.text}"
            }
        },
        None => rsx! {},
    }
}
