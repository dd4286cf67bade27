//! Company registration view.

use dioxus::prelude::*;

use crate::app::store::use_store;
use crate::state::forms::MIN_PASSWORD_LEN;
use crate::state::{Action, RegistrationField, View};

#[component]
pub fn Registration() -> Element {
    let store = use_store();
    let (form, busy) = {
        let state = store.state.read();
        (state.registration.clone(), state.in_flight.registration)
    };

    rsx! {
        div { class: "card p-6 space-y-4",
            div {
                h1 { class: "text-2xl font-bold", "Create account" }
                p { class: "text-gray-500 text-sm", "One account per company" }
            }
            form {
                class: "space-y-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    store.dispatch(Action::SubmitRegistration);
                },
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Company name",
                    value: "{form.company_name}",
                    oninput: move |evt| store.dispatch(Action::EditRegistration(RegistrationField::CompanyName, evt.value())),
                }
                input {
                    class: "field",
                    r#type: "email",
                    placeholder: "Email",
                    autocomplete: "username",
                    value: "{form.email}",
                    oninput: move |evt| store.dispatch(Action::EditRegistration(RegistrationField::Email, evt.value())),
                }
                input {
                    class: "field",
                    r#type: "password",
                    placeholder: "Password (min. {MIN_PASSWORD_LEN} characters)",
                    autocomplete: "new-password",
                    value: "{form.password}",
                    oninput: move |evt| store.dispatch(Action::EditRegistration(RegistrationField::Password, evt.value())),
                }
                button {
                    class: "btn w-full bg-indigo-600 text-white",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Creating account..." } else { "Create account" }
                }
            }
            p { class: "text-sm text-center text-gray-600",
                "Already registered? "
                button {
                    class: "text-indigo-600 font-semibold",
                    r#type: "button",
                    onclick: move |_| store.dispatch(Action::Navigate(View::Login)),
                    "Sign in"
                }
            }
        }
    }
}
