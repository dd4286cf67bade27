//! Dioxus fullstack application entry point.
//!
//! Exactly one view is rendered at a time. The active view lives in the
//! store, so there is no URL routing.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod store;

use components::Layout;
use pages::{BulkUpload, Dashboard, Directory, Login, QrTerminal, Registration};
use store::use_store_provider;

use crate::state::View;

/// Root app component
#[component]
pub fn App() -> Element {
    let store = use_store_provider();
    let view = store.state.read().view;

    let page = match view {
        View::Login => rsx! { Login {} },
        View::Registration => rsx! { Registration {} },
        View::Dashboard => rsx! { Dashboard {} },
        View::BulkUpload => rsx! { BulkUpload {} },
        View::QrTerminal => rsx! { QrTerminal {} },
        View::Directory => rsx! { Directory {} },
    };

    rsx! {
        Layout { view, {page} }
    }
}
