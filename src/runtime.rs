//! Effect runtime.
//!
//! Turns [`Effect`]s into backend calls and timers and reports each
//! completion back as an [`Action`]. The UI spawns one task per effect;
//! tests drive the same function in a loop with [`run_to_idle`].

use std::collections::VecDeque;

use tracing::debug;

use crate::client::AttendanceBackend;
use crate::platform;
use crate::state::{Action, AppState, Effect, SaveMode};

/// Perform one effect and return the action describing its outcome.
pub async fn execute<B>(backend: &B, effect: Effect) -> Option<Action>
where
    B: AttendanceBackend + ?Sized,
{
    match effect {
        Effect::Login {
            ticket,
            credentials,
        } => Some(Action::LoginFinished {
            ticket,
            result: backend.login(&credentials).await,
        }),
        Effect::Register { ticket, request } => Some(Action::RegistrationFinished {
            ticket,
            result: backend.register(&request).await,
        }),
        Effect::RedirectToLogin { ticket, after } => {
            platform::sleep(after).await;
            Some(Action::RedirectElapsed { ticket })
        }
        Effect::Upload { ticket, auth, file } => Some(Action::UploadFinished {
            ticket,
            result: backend.upload_attendance(&auth, &file).await,
        }),
        Effect::Checkin {
            ticket,
            auth,
            request,
        } => Some(Action::CheckinFinished {
            ticket,
            result: backend.record_checkin(&auth, &request).await,
        }),
        Effect::LoadDashboard { ticket, auth } => Some(Action::DashboardLoaded {
            ticket,
            snapshot: backend.load_dashboard(&auth).await,
        }),
        Effect::LoadDirectory { ticket, auth } => Some(Action::DirectoryLoaded {
            ticket,
            result: backend.list_employees(&auth).await,
        }),
        Effect::SaveEmployee {
            ticket,
            auth,
            mode,
            employee,
        } => {
            let result = match mode {
                SaveMode::Create => backend.create_employee(&auth, &employee).await,
                SaveMode::Update { employee_id } => {
                    backend.update_employee(&auth, employee_id, &employee).await
                }
            };
            Some(Action::EmployeeSaved { ticket, result })
        }
        Effect::DeleteEmployee {
            ticket,
            auth,
            employee_id,
        } => Some(Action::EmployeeDeleted {
            ticket,
            employee_id,
            result: backend.delete_employee(&auth, employee_id).await,
        }),
        Effect::ScrollToTop => {
            platform::scroll_to_top();
            None
        }
    }
}

/// Dispatch `action` and run every resulting effect, one at a time, until
/// nothing is left. Returns the number of effects performed.
pub async fn run_to_idle<B>(state: &mut AppState, backend: &B, action: Action) -> usize
where
    B: AttendanceBackend + ?Sized,
{
    let mut queue: VecDeque<Effect> = state.dispatch(action).into();
    let mut performed = 0;

    while let Some(effect) = queue.pop_front() {
        performed += 1;
        if let Some(next) = execute(backend, effect).await {
            debug!(?next, "Effect completed");
            queue.extend(state.dispatch(next));
        }
    }

    performed
}
