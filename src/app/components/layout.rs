//! Layout component wrapping every view with Tailwind CSS and common elements.

use dioxus::prelude::*;

use super::banner::StatusBanner;
use super::nav::Nav;
use crate::state::View;

/// Browser-side QR decoder used by the terminal's camera scanner.
const JSQR_SRC: &str = "https://cdn.jsdelivr.net/npm/jsqr@1.4.0/dist/jsQR.js";

/// CSS additions on top of Tailwind.
const CUSTOM_STYLES: &str = r#"
.card { background: #fff; border-radius: 0.75rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.field { width: 100%; border: 1px solid #d1d5db; border-radius: 0.5rem; padding: 0.5rem 0.75rem; }
.field:disabled { background: #f3f4f6; color: #6b7280; }
.btn { border-radius: 0.5rem; padding: 0.5rem 1rem; font-weight: 600; }
.btn:disabled { opacity: .5; cursor: not-allowed; }
.scanner-video { width: 100%; max-width: 420px; aspect-ratio: 1; object-fit: cover; border-radius: 0.75rem; background: #111827; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Active view (title and navigation highlight)
    pub view: View,
    /// View content
    pub children: Element,
}

/// Main layout component wrapping all views.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - HRIS Attendance", props.view.label());
    let signed_in = props.view.requires_session();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Script { src: JSQR_SRC }
        document::Style { {CUSTOM_STYLES} }

        div { class: "min-h-screen bg-gray-100 flex flex-col",
            if signed_in {
                header { Nav { active: props.view } }
            }
            main {
                class: if signed_in { "flex-1 max-w-6xl w-full mx-auto p-4 sm:p-6" } else { "flex-1 flex items-center justify-center p-4" },
                id: "view-{props.view.id()}",
                div { class: if signed_in { "space-y-4" } else { "w-full max-w-md space-y-4" },
                    StatusBanner {}
                    {props.children}
                }
            }
            footer { class: "text-center text-xs text-gray-400 py-3",
                "HRIS Attendance v{version}"
            }
        }
    }
}
