//! Employee directory: create/edit form, table and delete confirmation.

use dioxus::prelude::*;

use crate::app::store::use_store;
use crate::state::{Action, EmployeeField};

#[component]
pub fn Directory() -> Element {
    let store = use_store();
    let state = store.state.read();
    let form = state.employee_form.clone();
    let employees = state.employees.clone();
    let pending_delete = state.pending_delete.clone();
    let loading = state.in_flight.directory;
    let saving = state.in_flight.saving_employee;
    drop(state);

    let editing = form.is_editing();

    rsx! {
        h1 { class: "text-2xl font-bold", "Employees" }

        // Create / edit form
        section { class: "card p-4",
            h2 { class: "text-lg font-semibold mb-3",
                if let Some(id) = form.editing { "Editing employee #{id}" } else { "New employee" }
            }
            form {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    store.dispatch(Action::SubmitEmployee);
                },
                input {
                    class: "field",
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "Employee ID",
                    disabled: editing,
                    value: "{form.employee_id}",
                    oninput: move |evt| store.dispatch(Action::EditEmployee(EmployeeField::EmployeeId, evt.value())),
                }
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Full name",
                    value: "{form.full_name}",
                    oninput: move |evt| store.dispatch(Action::EditEmployee(EmployeeField::FullName, evt.value())),
                }
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Role",
                    value: "{form.role}",
                    oninput: move |evt| store.dispatch(Action::EditEmployee(EmployeeField::Role, evt.value())),
                }
                input {
                    class: "field",
                    r#type: "text",
                    placeholder: "Department",
                    value: "{form.department}",
                    oninput: move |evt| store.dispatch(Action::EditEmployee(EmployeeField::Department, evt.value())),
                }
                div { class: "sm:col-span-2 flex gap-2",
                    button {
                        class: "btn bg-indigo-600 text-white",
                        r#type: "submit",
                        disabled: saving,
                        if editing { "Save changes" } else { "Add employee" }
                    }
                    if editing {
                        button {
                            class: "btn bg-gray-200 text-gray-800",
                            r#type: "button",
                            onclick: move |_| store.dispatch(Action::CancelEdit),
                            "Cancel"
                        }
                    }
                }
            }
        }

        // Delete confirmation
        if let Some(employee) = pending_delete {
            div { class: "card p-4 border border-red-300 flex flex-wrap items-center justify-between gap-3",
                role: "alertdialog",
                p { class: "text-sm",
                    "Delete employee #{employee.employee_id} ({employee.full_name})? This cannot be undone."
                }
                div { class: "flex gap-2",
                    button {
                        class: "btn bg-red-600 text-white",
                        r#type: "button",
                        onclick: move |_| store.dispatch(Action::ConfirmDelete),
                        "Delete"
                    }
                    button {
                        class: "btn bg-gray-200 text-gray-800",
                        r#type: "button",
                        onclick: move |_| store.dispatch(Action::CancelDelete),
                        "Keep"
                    }
                }
            }
        }

        // Employee table
        section { class: "card p-4 overflow-x-auto",
            table { class: "w-full text-sm",
                thead {
                    tr { class: "border-b text-left",
                        th { class: "py-2 px-3", "ID" }
                        th { class: "py-2 px-3", "Name" }
                        th { class: "py-2 px-3", "Role" }
                        th { class: "py-2 px-3", "Department" }
                        th { class: "py-2 px-3", "" }
                    }
                }
                tbody {
                    if loading && employees.is_empty() {
                        tr {
                            td { class: "py-4 px-3 text-center text-gray-500", colspan: "5", "Loading..." }
                        }
                    } else if employees.is_empty() {
                        tr {
                            td { class: "py-4 px-3 text-center text-gray-500", colspan: "5", "No employees yet." }
                        }
                    }
                    for employee in employees {
                        tr { key: "{employee.employee_id}", class: "border-b",
                            td { class: "py-2 px-3 font-mono", "{employee.employee_id}" }
                            td { class: "py-2 px-3", "{employee.full_name}" }
                            td { class: "py-2 px-3", "{employee.role}" }
                            td { class: "py-2 px-3", "{employee.department}" }
                            td { class: "py-2 px-3 text-right whitespace-nowrap",
                                button {
                                    class: "text-indigo-600 font-semibold mr-3",
                                    r#type: "button",
                                    onclick: {
                                        let employee = employee.clone();
                                        move |_| store.dispatch(Action::BeginEdit(employee.clone()))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "text-red-600 font-semibold",
                                    r#type: "button",
                                    onclick: {
                                        let employee = employee.clone();
                                        move |_| store.dispatch(Action::RequestDelete(employee.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
