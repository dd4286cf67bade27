//! QR check-in terminal: camera scanner plus manual entry.

use dioxus::prelude::*;

use crate::app::components::Scanner;
use crate::app::store::use_store;
use crate::state::Action;

#[component]
pub fn QrTerminal() -> Element {
    let store = use_store();
    let manual_id = store.state.read().checkin.manual_id.clone();

    rsx! {
        div { class: "card p-6 space-y-6",
            div {
                h1 { class: "text-2xl font-bold", "QR Terminal" }
                p { class: "text-gray-500 text-sm", "Scan an employee badge to record attendance" }
            }

            Scanner {}

            form {
                class: "flex gap-2 max-w-md mx-auto",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    store.dispatch(Action::SubmitManualCheckin);
                },
                input {
                    class: "field",
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "Employee ID",
                    value: "{manual_id}",
                    oninput: move |evt| store.dispatch(Action::EditManualId(evt.value())),
                }
                button { class: "btn bg-indigo-600 text-white", r#type: "submit", "Check in" }
            }
        }
    }
}
