//! Bulk Excel import view.

use dioxus::prelude::*;
use tracing::warn;

use crate::app::store::use_store;
use crate::client::UploadFile;
use crate::state::Action;

/// The import endpoint only reads .xlsx workbooks
const ACCEPTED_TYPES: &str = ".xlsx";

#[component]
pub fn BulkUpload() -> Element {
    let store = use_store();
    let (selected, busy) = {
        let state = store.state.read();
        (
            state.upload_file.as_ref().map(|f| f.name.clone()),
            state.in_flight.upload,
        )
    };

    let on_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            store.dispatch(Action::SelectFile(None));
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => store.dispatch(Action::SelectFile(Some(UploadFile {
                name,
                bytes: bytes.to_vec(),
            }))),
            Err(e) => {
                warn!(file = %name, "Failed to read selected file: {:?}", e);
                store.dispatch(Action::SelectFile(None));
            }
        }
    };

    rsx! {
        div { class: "card p-6 space-y-4",
            div {
                h1 { class: "text-2xl font-bold", "Excel Import" }
                p { class: "text-gray-500 text-sm",
                    "Upload an attendance spreadsheet. Every row is imported for your company."
                }
            }
            form {
                class: "space-y-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    store.dispatch(Action::SubmitUpload);
                },
                input {
                    class: "field",
                    r#type: "file",
                    accept: ACCEPTED_TYPES,
                    disabled: busy,
                    onchange: on_file,
                }
                if let Some(name) = selected {
                    p { class: "text-sm text-gray-600", "Selected: {name}" }
                }
                button {
                    class: "btn bg-indigo-600 text-white",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Uploading..." } else { "Upload" }
                }
            }
        }
    }
}
