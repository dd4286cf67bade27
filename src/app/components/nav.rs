//! Navigation component using Tailwind CSS.

use dioxus::prelude::*;

use crate::app::store::use_store;
use crate::state::{Action, View};

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active view
    pub active: View,
}

/// Navigation bar with company name, logout and mobile toggle.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let store = use_store();
    let (menu_open, company) = {
        let state = store.state.read();
        (
            state.menu_open,
            state.company_name().unwrap_or_default().to_string(),
        )
    };

    let nav_link_class = |view: View| {
        if props.active == view {
            "block px-3 py-2 rounded-md text-sm font-medium text-white bg-gray-900"
        } else {
            "block px-3 py-2 rounded-md text-sm font-medium text-gray-300 hover:text-white hover:bg-gray-700"
        }
    };

    let mobile_menu_class = if menu_open {
        "block lg:hidden"
    } else {
        "hidden lg:hidden"
    };

    rsx! {
        nav { class: "bg-gray-800",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    // Brand
                    div { class: "flex items-center gap-3",
                        span { class: "text-white font-bold text-xl", "HRIS" }
                        span { class: "text-gray-300 text-sm truncate", "{company}" }
                    }

                    // Desktop navigation
                    div { class: "hidden lg:flex items-center space-x-4",
                        for view in View::NAVIGATION {
                            button {
                                key: "{view.id()}",
                                class: nav_link_class(view),
                                r#type: "button",
                                onclick: move |_| store.dispatch(Action::Navigate(view)),
                                "{view.label()}"
                            }
                        }
                        button {
                            class: "block px-3 py-2 rounded-md text-sm font-medium text-red-300 hover:text-white hover:bg-red-700",
                            r#type: "button",
                            onclick: move |_| store.dispatch(Action::Logout),
                            "Sign out"
                        }
                    }

                    // Mobile menu button
                    div { class: "lg:hidden",
                        button {
                            class: "inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-white hover:bg-gray-700 focus:outline-none",
                            r#type: "button",
                            onclick: move |_| store.dispatch(Action::ToggleMenu),
                            span { class: "sr-only", "Toggle menu" }
                            if menu_open {
                                // X icon
                                svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                                }
                            } else {
                                // Hamburger icon
                                svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                                }
                            }
                        }
                    }
                }
            }

            // Mobile menu (navigating closes it)
            div { class: "{mobile_menu_class}", id: "mobile-menu",
                div { class: "px-2 pt-2 pb-3 space-y-1",
                    for view in View::NAVIGATION {
                        button {
                            key: "{view.id()}",
                            class: "{nav_link_class(view)} w-full text-left",
                            r#type: "button",
                            onclick: move |_| store.dispatch(Action::Navigate(view)),
                            "{view.label()}"
                        }
                    }
                    button {
                        class: "block w-full text-left px-3 py-2 rounded-md text-sm font-medium text-red-300 hover:text-white hover:bg-red-700",
                        r#type: "button",
                        onclick: move |_| store.dispatch(Action::Logout),
                        "Sign out"
                    }
                }
            }
        }
    }
}
