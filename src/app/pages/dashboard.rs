//! Dashboard page component.
//!
//! Headline figures, check-ins per hour and the check-in log, loaded
//! together when the view is entered.

use chrono::NaiveDateTime;
use dioxus::prelude::*;

use crate::app::store::use_store;
use crate::state::Action;

/// Timestamp layout used by the backend
const BACKEND_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Split a backend timestamp into date and time for display.
///
/// Anything that does not parse is shown unchanged in the time column.
fn split_timestamp(raw: &str) -> (String, String) {
    match NaiveDateTime::parse_from_str(raw.trim(), BACKEND_TIME_FORMAT) {
        Ok(at) => (
            at.format("%d/%m/%Y").to_string(),
            at.format("%H:%M:%S").to_string(),
        ),
        Err(_) => (String::new(), raw.to_string()),
    }
}

/// Bar height in percent of the tallest bar.
fn bar_percent(count: u64, peak: u64) -> u64 {
    if peak == 0 {
        0
    } else {
        (count * 100 / peak).max(2)
    }
}

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let store = use_store();
    let state = store.state.read();
    let loading = state.in_flight.dashboard;
    let statistics = state.statistics.clone();
    let records = state.records.clone();
    drop(state);

    let peak = statistics.peak_hourly_count();
    let rows: Vec<_> = records
        .iter()
        .map(|record| {
            let (date, time) = split_timestamp(&record.scanned_at);
            (record.employee_id, date, time, record.status)
        })
        .collect();

    rsx! {
        div { class: "flex items-center justify-between",
            h1 { class: "text-2xl font-bold", "Dashboard" }
            button {
                class: "btn bg-white border border-gray-300 text-gray-700",
                r#type: "button",
                disabled: loading,
                onclick: move |_| store.dispatch(Action::RefreshDashboard),
                if loading { "Loading..." } else { "Refresh" }
            }
        }

        // Headline figures
        section { class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
            for item in statistics.summary.iter() {
                div { class: "card p-4",
                    p { class: "text-sm text-gray-500", "{item.title}" }
                    p { class: "text-3xl font-bold", "{item.value}" }
                }
            }
        }

        // Check-ins per hour
        section { class: "card p-4",
            h2 { class: "text-lg font-semibold mb-3", "Check-ins per hour" }
            if statistics.hourly_volume.is_empty() {
                p { class: "text-sm text-gray-500", "No check-ins yet." }
            } else {
                div { class: "flex items-end gap-2 h-48",
                    for bucket in statistics.hourly_volume.iter() {
                        div { class: "flex-1 flex flex-col items-center justify-end h-full",
                            span { class: "text-xs text-gray-600", "{bucket.count}" }
                            div {
                                class: "w-full bg-indigo-500 rounded-t",
                                style: "height: {bar_percent(bucket.count, peak)}%;",
                                title: "{bucket.label}: {bucket.count}",
                            }
                            span { class: "text-xs text-gray-500 mt-1", "{bucket.label}" }
                        }
                    }
                }
            }
        }

        // Check-in log, most recent first
        section { class: "card p-4 overflow-x-auto",
            h2 { class: "text-lg font-semibold mb-3", "Check-in log" }
            table { class: "w-full text-sm",
                thead {
                    tr { class: "border-b text-left",
                        th { class: "py-2 px-3", "Employee ID" }
                        th { class: "py-2 px-3", "Date" }
                        th { class: "py-2 px-3", "Time" }
                        th { class: "py-2 px-3", "Status" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "py-4 px-3 text-center text-gray-500", colspan: "4",
                                "No check-ins recorded."
                            }
                        }
                    }
                    for (employee_id, date, time, status) in rows {
                        tr { class: "border-b",
                            td { class: "py-2 px-3 font-mono", "#{employee_id}" }
                            td { class: "py-2 px-3", "{date}" }
                            td { class: "py-2 px-3", "{time}" }
                            td { class: "py-2 px-3",
                                span { class: "px-2 py-0.5 rounded-full bg-green-100 text-green-800 text-xs",
                                    "{status}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
