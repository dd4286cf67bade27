//! Sign-in view.

use dioxus::prelude::*;

use crate::app::store::use_store;
use crate::state::{Action, LoginField, View};

#[component]
pub fn Login() -> Element {
    let store = use_store();
    let (form, busy) = {
        let state = store.state.read();
        (state.login.clone(), state.in_flight.login)
    };

    rsx! {
        div { class: "card p-6 space-y-4",
            div {
                h1 { class: "text-2xl font-bold", "HRIS Attendance" }
                p { class: "text-gray-500 text-sm", "Sign in with your company account" }
            }
            form {
                class: "space-y-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    store.dispatch(Action::SubmitLogin);
                },
                input {
                    class: "field",
                    r#type: "email",
                    placeholder: "Email",
                    autocomplete: "username",
                    value: "{form.email}",
                    oninput: move |evt| store.dispatch(Action::EditLogin(LoginField::Email, evt.value())),
                }
                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Password",
                    autocomplete: "current-password",
                    value: "{form.password}",
                    oninput: move |evt| store.dispatch(Action::EditLogin(LoginField::Password, evt.value())),
                }
                button {
                    class: "btn w-full bg-indigo-600 text-white",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Signing in..." } else { "Sign in" }
                }
            }
            p { class: "text-sm text-center text-gray-600",
                "No account yet? "
                button {
                    class: "text-indigo-600 font-semibold",
                    r#type: "button",
                    onclick: move |_| store.dispatch(Action::Navigate(View::Registration)),
                    "Register your company"
                }
            }
        }
    }
}
