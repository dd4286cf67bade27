//! Application state and its reducer.
//!
//! All mutable UI state lives in one [`AppState`]. The only way to change
//! it is [`AppState::dispatch`], which applies one [`Action`] and returns
//! the [`Effect`]s the runtime must perform. The reducer never awaits and
//! never touches the network, so every transition is testable in isolation.
//!
//! Invariants kept by the reducer:
//! - without a session the view is `Login` or `Registration`; with one it
//!   is one of [`View::NAVIGATION`]
//! - every view change clears banners, forms, an in-progress edit and a
//!   pending delete confirmation
//! - completions carrying a ticket from an older generation are ignored

pub mod action;
pub mod banner;
pub mod forms;
pub mod scan;
pub mod session;
pub mod view;

use std::time::Duration;

use hris_wire::{AttendanceRecord, CheckinRequest, Employee, Statistics};
use tracing::{debug, info, warn};

pub use action::{Action, Effect, SaveMode, Ticket};
pub use banner::{Banner, Tone};
pub use forms::{
    CheckinForm, EmployeeField, EmployeeForm, LoginField, LoginForm, RegistrationField,
    RegistrationForm,
};
pub use scan::ScanGate;
pub use session::Session;
pub use view::{Phase, View};

use crate::client::{strip_status_glyphs, DashboardSnapshot, TenantAuth, UploadFile};
use crate::config::ClientConfig;
use crate::error::ValidationError;

/// Timing knobs taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub scan_delay_ms: u64,
    pub redirect_delay: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self::from(&ClientConfig::default())
    }
}

impl From<&ClientConfig> for Timing {
    fn from(config: &ClientConfig) -> Self {
        Self {
            scan_delay_ms: config.scan_delay_ms,
            redirect_delay: Duration::from_millis(config.redirect_delay_ms),
        }
    }
}

/// Requests currently awaited, used to ignore double submits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InFlight {
    pub login: bool,
    pub registration: bool,
    pub upload: bool,
    pub dashboard: bool,
    pub directory: bool,
    pub saving_employee: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub session: Option<Session>,
    pub view: View,
    pub menu_open: bool,
    pub banner: Option<Banner>,

    pub login: LoginForm,
    pub registration: RegistrationForm,
    pub upload_file: Option<UploadFile>,
    pub checkin: CheckinForm,
    pub employee_form: EmployeeForm,
    /// Employee awaiting delete confirmation
    pub pending_delete: Option<Employee>,

    /// Check-in log, most recent first
    pub records: Vec<AttendanceRecord>,
    pub statistics: Statistics,
    pub employees: Vec<Employee>,

    pub in_flight: InFlight,

    generation: u64,
    scan_gate: ScanGate,
    timing: Timing,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl AppState {
    pub fn new(timing: Timing) -> Self {
        Self {
            session: None,
            view: View::Login,
            menu_open: false,
            banner: None,
            login: LoginForm::default(),
            registration: RegistrationForm::default(),
            upload_file: None,
            checkin: CheckinForm::default(),
            employee_form: EmployeeForm::default(),
            pending_delete: None,
            records: Vec::new(),
            statistics: Statistics::default(),
            employees: Vec::new(),
            in_flight: InFlight::default(),
            generation: 0,
            scan_gate: ScanGate::new(timing.scan_delay_ms),
            timing,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn tenant_id(&self) -> Option<i64> {
        self.session.as_ref().map(Session::tenant_id)
    }

    pub fn company_name(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.company_name.as_str())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The active view belongs to the phase implied by the session.
    pub fn view_matches_session(&self) -> bool {
        self.view.requires_session() == self.is_authenticated()
    }

    fn ticket(&self) -> Ticket {
        Ticket::new(self.generation)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation() == self.generation
    }

    fn auth(&self) -> Option<TenantAuth> {
        self.session.as_ref().map(|s| s.auth.clone())
    }

    /// Auth for an action that only makes sense on `view`.
    fn auth_on(&self, view: View) -> Option<TenantAuth> {
        if self.view == view {
            self.auth()
        } else {
            None
        }
    }

    /// Apply one action and return the effects to run.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let effects = match action {
            Action::Navigate(view) => self.navigate(view),
            Action::ToggleMenu => {
                if self.is_authenticated() {
                    self.menu_open = !self.menu_open;
                }
                Vec::new()
            }
            Action::Logout => self.logout(),

            Action::EditLogin(field, value) => {
                self.login.set(field, value);
                Vec::new()
            }
            Action::SubmitLogin => self.submit_login(),
            Action::LoginFinished { ticket, result } => {
                if !self.is_current(ticket) {
                    debug!("Dropping stale login response");
                    return Vec::new();
                }
                self.in_flight.login = false;
                match result {
                    Ok(login) => {
                        let session = Session::from_login(&login);
                        info!(tenant = session.tenant_id(), company = %session.company_name, "Signed in");
                        self.session = Some(session);
                        self.enter(View::LANDING)
                    }
                    Err(e) => {
                        self.banner = Some(Banner::error(e.user_message("Invalid credentials.")));
                        Vec::new()
                    }
                }
            }

            Action::EditRegistration(field, value) => {
                self.registration.set(field, value);
                Vec::new()
            }
            Action::SubmitRegistration => self.submit_registration(),
            Action::RegistrationFinished { ticket, result } => {
                if !self.is_current(ticket) {
                    debug!("Dropping stale registration response");
                    return Vec::new();
                }
                self.in_flight.registration = false;
                match result {
                    Ok(reply) => {
                        let text = if reply.message.trim().is_empty() {
                            "Account created. You can sign in now.".to_string()
                        } else {
                            reply.message
                        };
                        self.banner = Some(Banner::success(text));
                        self.registration = RegistrationForm::default();
                        vec![Effect::RedirectToLogin {
                            ticket,
                            after: self.timing.redirect_delay,
                        }]
                    }
                    Err(e) => {
                        self.banner = Some(Banner::error(e.user_message("Registration failed.")));
                        Vec::new()
                    }
                }
            }
            Action::RedirectElapsed { ticket } => {
                if self.is_current(ticket) && self.view == View::Registration {
                    self.enter(View::Login)
                } else {
                    Vec::new()
                }
            }

            Action::SelectFile(file) => {
                if self.view != View::BulkUpload {
                    debug!(view = %self.view, "Dropping file selection outside the import view");
                    return Vec::new();
                }
                if let Some(ref f) = file {
                    debug!(name = %f.name, bytes = f.bytes.len(), "Spreadsheet selected");
                }
                self.upload_file = file;
                self.banner = None;
                Vec::new()
            }
            Action::SubmitUpload => self.submit_upload(),
            Action::UploadFinished { ticket, result } => {
                if !self.is_current(ticket) {
                    return Vec::new();
                }
                self.in_flight.upload = false;
                match result {
                    Ok(receipt) => {
                        self.banner = Some(Banner::success(format!(
                            "{} records processed.",
                            receipt.rows_imported
                        )));
                        self.upload_file = None;
                    }
                    Err(e) => {
                        self.banner = Some(Banner::error(e.user_message("Upload failed.")));
                    }
                }
                Vec::new()
            }

            Action::EditManualId(value) => {
                self.checkin.manual_id = value;
                Vec::new()
            }
            Action::SubmitManualCheckin => {
                let raw = self.checkin.manual_id.clone();
                self.start_checkin(&raw)
            }
            Action::Scanned { raw, at_ms } => {
                if self.view != View::QrTerminal {
                    return Vec::new();
                }
                match self.scan_gate.accept(&raw, at_ms) {
                    Some(value) => self.start_checkin(&value),
                    None => {
                        debug!("Scan ignored within scan delay");
                        Vec::new()
                    }
                }
            }
            Action::CheckinFinished { ticket, result } => {
                if !self.is_current(ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(reply) => {
                        self.banner = Some(Banner::success(strip_status_glyphs(&reply.message)));
                        self.checkin.manual_id.clear();
                    }
                    Err(e) => {
                        self.banner = Some(Banner::error(e.user_message("Check-in rejected.")));
                    }
                }
                Vec::new()
            }

            Action::RefreshDashboard => {
                if self.in_flight.dashboard {
                    return Vec::new();
                }
                self.load_dashboard()
            }
            Action::DashboardLoaded { ticket, snapshot } => {
                if !self.is_current(ticket) {
                    debug!("Dropping stale dashboard snapshot");
                    return Vec::new();
                }
                self.in_flight.dashboard = false;
                self.apply_dashboard(snapshot);
                Vec::new()
            }

            Action::RefreshDirectory => {
                if self.in_flight.directory {
                    return Vec::new();
                }
                self.load_directory()
            }
            Action::DirectoryLoaded { ticket, result } => {
                if !self.is_current(ticket) {
                    debug!("Dropping stale employee list");
                    return Vec::new();
                }
                self.in_flight.directory = false;
                match result {
                    Ok(employees) => self.employees = employees,
                    Err(e) => {
                        warn!("Failed to load employees: {}", e);
                        self.banner =
                            Some(Banner::error(e.user_message("Could not load employees.")));
                    }
                }
                Vec::new()
            }
            Action::EditEmployee(field, value) => {
                self.employee_form.set(field, value);
                Vec::new()
            }
            Action::SubmitEmployee => self.submit_employee(),
            Action::EmployeeSaved { ticket, result } => {
                if !self.is_current(ticket) {
                    return Vec::new();
                }
                self.in_flight.saving_employee = false;
                match result {
                    Ok(reply) => {
                        let text = if reply.message.trim().is_empty() {
                            "Employee saved.".to_string()
                        } else {
                            reply.message
                        };
                        self.employee_form.clear();
                        self.banner = Some(Banner::success(text));
                        self.load_directory()
                    }
                    Err(e) => {
                        self.banner =
                            Some(Banner::error(e.user_message("Could not save the employee.")));
                        Vec::new()
                    }
                }
            }
            Action::BeginEdit(employee) => {
                if self.view != View::Directory {
                    return Vec::new();
                }
                self.employee_form.begin_edit(&employee);
                self.pending_delete = None;
                self.banner = None;
                vec![Effect::ScrollToTop]
            }
            Action::CancelEdit => {
                self.employee_form.clear();
                self.banner = None;
                Vec::new()
            }
            Action::RequestDelete(employee) => {
                if self.view == View::Directory {
                    self.pending_delete = Some(employee);
                }
                Vec::new()
            }
            Action::CancelDelete => {
                self.pending_delete = None;
                Vec::new()
            }
            Action::ConfirmDelete => {
                let Some(auth) = self.auth_on(View::Directory) else {
                    return Vec::new();
                };
                match self.pending_delete.take() {
                    Some(employee) => vec![Effect::DeleteEmployee {
                        ticket: self.ticket(),
                        auth,
                        employee_id: employee.employee_id,
                    }],
                    None => Vec::new(),
                }
            }
            Action::EmployeeDeleted {
                ticket,
                employee_id,
                result,
            } => {
                if !self.is_current(ticket) {
                    return Vec::new();
                }
                match result {
                    Ok(()) => {
                        if self.employee_form.editing == Some(employee_id) {
                            self.employee_form.clear();
                        }
                        self.banner = Some(Banner::success(format!(
                            "Employee #{} removed.",
                            employee_id
                        )));
                        self.load_directory()
                    }
                    Err(e) => {
                        warn!(employee_id, "Failed to delete employee: {}", e);
                        self.banner =
                            Some(Banner::error(e.user_message("Could not delete the employee.")));
                        Vec::new()
                    }
                }
            }
        };

        debug_assert!(self.view_matches_session());
        effects
    }

    fn navigate(&mut self, view: View) -> Vec<Effect> {
        if view.requires_session() != self.is_authenticated() {
            debug!(%view, "Navigation not allowed in the current phase");
            return Vec::new();
        }
        self.enter(view)
    }

    /// Switch to `view`, reset every view-local holder and start its load.
    fn enter(&mut self, view: View) -> Vec<Effect> {
        debug!(from = %self.view, to = %view, "View transition");
        self.generation += 1;
        self.view = view;
        self.menu_open = false;
        self.banner = None;
        self.login = LoginForm::default();
        self.registration = RegistrationForm::default();
        self.upload_file = None;
        self.checkin = CheckinForm::default();
        self.employee_form.clear();
        self.pending_delete = None;
        self.in_flight = InFlight::default();
        self.scan_gate.reset();

        match view {
            View::Dashboard => self.load_dashboard(),
            View::Directory => self.load_directory(),
            _ => Vec::new(),
        }
    }

    fn logout(&mut self) -> Vec<Effect> {
        if let Some(session) = &self.session {
            info!(tenant = session.tenant_id(), "Signed out");
        }
        let generation = self.generation + 1;
        *self = Self::new(self.timing);
        self.generation = generation;
        Vec::new()
    }

    fn submit_login(&mut self) -> Vec<Effect> {
        if self.view != View::Login || self.in_flight.login {
            return Vec::new();
        }
        match self.login.to_credentials() {
            Ok(credentials) => {
                self.in_flight.login = true;
                self.banner = None;
                vec![Effect::Login {
                    ticket: self.ticket(),
                    credentials,
                }]
            }
            Err(e) => self.reject(e),
        }
    }

    fn submit_registration(&mut self) -> Vec<Effect> {
        if self.view != View::Registration || self.in_flight.registration {
            return Vec::new();
        }
        match self.registration.to_request() {
            Ok(request) => {
                self.in_flight.registration = true;
                self.banner = None;
                vec![Effect::Register {
                    ticket: self.ticket(),
                    request,
                }]
            }
            Err(e) => self.reject(e),
        }
    }

    fn submit_upload(&mut self) -> Vec<Effect> {
        let Some(auth) = self.auth_on(View::BulkUpload) else {
            return Vec::new();
        };
        if self.in_flight.upload {
            return Vec::new();
        }
        match self.upload_file.clone() {
            Some(file) => {
                self.in_flight.upload = true;
                self.banner = Some(Banner::info("Processing document..."));
                vec![Effect::Upload {
                    ticket: self.ticket(),
                    auth,
                    file,
                }]
            }
            None => self.reject(ValidationError::NoFileSelected),
        }
    }

    fn start_checkin(&mut self, raw: &str) -> Vec<Effect> {
        let Some(auth) = self.auth_on(View::QrTerminal) else {
            return Vec::new();
        };
        match forms::parse_employee_id(raw) {
            Ok(employee_id) => {
                self.banner = Some(Banner::info("Verifying..."));
                vec![Effect::Checkin {
                    ticket: self.ticket(),
                    auth,
                    request: CheckinRequest::new(employee_id),
                }]
            }
            Err(e) => self.reject(e),
        }
    }

    fn load_dashboard(&mut self) -> Vec<Effect> {
        let Some(auth) = self.auth_on(View::Dashboard) else {
            return Vec::new();
        };
        self.in_flight.dashboard = true;
        vec![Effect::LoadDashboard {
            ticket: self.ticket(),
            auth,
        }]
    }

    /// Apply whichever half of the snapshot arrived.
    ///
    /// A failed half keeps its previous data and is reported as a warning;
    /// if both fail the dashboard shows an error.
    fn apply_dashboard(&mut self, snapshot: DashboardSnapshot) {
        let mut failures = Vec::new();

        match snapshot.records {
            Ok(mut records) => {
                records.reverse();
                self.records = records;
            }
            Err(e) => {
                warn!("Failed to load check-in log: {}", e);
                failures.push(("check-in log", e));
            }
        }
        match snapshot.statistics {
            Ok(statistics) => self.statistics = statistics,
            Err(e) => {
                warn!("Failed to load statistics: {}", e);
                failures.push(("statistics", e));
            }
        }

        self.banner = match failures.as_slice() {
            [] => None,
            [(what, e)] => Some(Banner::warning(format!(
                "Could not load the {}: {}",
                what,
                e.user_message("request rejected")
            ))),
            [(_, e), ..] => Some(Banner::error(format!(
                "Could not load the dashboard: {}",
                e.user_message("request rejected")
            ))),
        };
    }

    fn load_directory(&mut self) -> Vec<Effect> {
        let Some(auth) = self.auth_on(View::Directory) else {
            return Vec::new();
        };
        self.in_flight.directory = true;
        vec![Effect::LoadDirectory {
            ticket: self.ticket(),
            auth,
        }]
    }

    fn submit_employee(&mut self) -> Vec<Effect> {
        let Some(auth) = self.auth_on(View::Directory) else {
            return Vec::new();
        };
        if self.in_flight.saving_employee {
            return Vec::new();
        }
        match self.employee_form.validate() {
            Ok(employee) => {
                let mode = match self.employee_form.editing {
                    Some(employee_id) => SaveMode::Update { employee_id },
                    None => SaveMode::Create,
                };
                self.in_flight.saving_employee = true;
                self.banner = Some(Banner::info(match mode {
                    SaveMode::Create => "Registering employee...",
                    SaveMode::Update { .. } => "Updating employee...",
                }));
                vec![Effect::SaveEmployee {
                    ticket: self.ticket(),
                    auth,
                    mode,
                    employee,
                }]
            }
            Err(e) => self.reject(e),
        }
    }

    fn reject(&mut self, error: ValidationError) -> Vec<Effect> {
        debug!(view = %self.view, "Rejected locally: {}", error);
        self.banner = Some(Banner::error(error.to_string()));
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use hris_wire::{LoginResponse, MessageReply, UploadReceipt};

    fn login_response() -> LoginResponse {
        LoginResponse {
            user_id: 7,
            company_name: "Acme".to_string(),
            token: None,
        }
    }

    /// State signed in as tenant 7 and sitting on `view`.
    fn signed_in(view: View) -> AppState {
        let mut state = AppState::default();
        state.dispatch(Action::EditLogin(LoginField::Email, "hr@acme.test".to_string()));
        state.dispatch(Action::EditLogin(LoginField::Password, "secret".to_string()));
        let effects = state.dispatch(Action::SubmitLogin);
        let ticket = match &effects[..] {
            [Effect::Login { ticket, .. }] => *ticket,
            other => panic!("expected login effect, got {:?}", other),
        };
        state.dispatch(Action::LoginFinished {
            ticket,
            result: Ok(login_response()),
        });
        if view != View::Dashboard {
            state.dispatch(Action::Navigate(view));
        }
        state
    }

    fn only_effect(effects: Vec<Effect>) -> Effect {
        assert_eq!(effects.len(), 1, "expected one effect, got {:?}", effects);
        effects.into_iter().next().unwrap()
    }

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            employee_id: id,
            full_name: name.to_string(),
            role: "Operator".to_string(),
            department: "Plant".to_string(),
        }
    }

    fn record(id: i64, at: &str) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: id,
            scanned_at: at.to_string(),
            training_id: Some(1),
            status: Default::default(),
        }
    }

    #[test]
    fn test_login_success_lands_on_dashboard() {
        let mut state = AppState::default();
        state.dispatch(Action::EditLogin(LoginField::Email, "hr@acme.test".to_string()));
        state.dispatch(Action::EditLogin(LoginField::Password, "secret".to_string()));

        let effect = only_effect(state.dispatch(Action::SubmitLogin));
        let Effect::Login { ticket, credentials } = effect else {
            panic!("expected login effect");
        };
        assert_eq!(credentials.email, "hr@acme.test");
        assert!(state.in_flight.login);

        let effects = state.dispatch(Action::LoginFinished {
            ticket,
            result: Ok(login_response()),
        });

        assert_eq!(state.view, View::Dashboard);
        assert_eq!(state.tenant_id(), Some(7));
        assert_eq!(state.company_name(), Some("Acme"));
        assert_eq!(state.login, LoginForm::default());
        assert!(matches!(
            only_effect(effects),
            Effect::LoadDashboard { auth, .. } if auth.tenant_id == 7
        ));
    }

    #[test]
    fn test_login_failure_shows_server_message() {
        let mut state = AppState::default();
        state.dispatch(Action::EditLogin(LoginField::Email, "hr@acme.test".to_string()));
        state.dispatch(Action::EditLogin(LoginField::Password, "wrong".to_string()));
        let Effect::Login { ticket, .. } = only_effect(state.dispatch(Action::SubmitLogin)) else {
            panic!("expected login effect");
        };

        let effects = state.dispatch(Action::LoginFinished {
            ticket,
            result: Err(ApiError::Server {
                status: 401,
                detail: Some("Wrong email or password.".to_string()),
            }),
        });

        assert!(effects.is_empty());
        assert!(!state.is_authenticated());
        assert_eq!(state.view, View::Login);
        assert_eq!(
            state.banner,
            Some(Banner::error("Wrong email or password."))
        );
        assert!(!state.in_flight.login);
    }

    #[test]
    fn test_login_network_failure_is_generic() {
        let mut state = AppState::default();
        state.dispatch(Action::EditLogin(LoginField::Email, "a@b.c".to_string()));
        state.dispatch(Action::EditLogin(LoginField::Password, "x".to_string()));
        let Effect::Login { ticket, .. } = only_effect(state.dispatch(Action::SubmitLogin)) else {
            panic!("expected login effect");
        };
        state.dispatch(Action::LoginFinished {
            ticket,
            result: Err(ApiError::Network("refused".to_string())),
        });
        assert_eq!(
            state.banner,
            Some(Banner::error(crate::error::CONNECTION_ERROR))
        );
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut state = AppState::default();
        state.dispatch(Action::EditLogin(LoginField::Email, "a@b.c".to_string()));
        state.dispatch(Action::EditLogin(LoginField::Password, "x".to_string()));
        assert_eq!(state.dispatch(Action::SubmitLogin).len(), 1);
        assert!(state.dispatch(Action::SubmitLogin).is_empty());
    }

    #[test]
    fn test_empty_login_is_rejected_locally() {
        let mut state = AppState::default();
        assert!(state.dispatch(Action::SubmitLogin).is_empty());
        assert!(state.banner.as_ref().is_some_and(Banner::is_error));
    }

    #[test]
    fn test_authenticated_views_need_a_session() {
        let mut state = AppState::default();
        assert!(state.dispatch(Action::Navigate(View::Dashboard)).is_empty());
        assert_eq!(state.view, View::Login);

        state.dispatch(Action::Navigate(View::Registration));
        assert_eq!(state.view, View::Registration);

        let mut signed = signed_in(View::Dashboard);
        signed.dispatch(Action::Navigate(View::Login));
        assert_eq!(signed.view, View::Dashboard);
    }

    #[test]
    fn test_navigation_clears_banners_and_forms() {
        let mut state = signed_in(View::Directory);
        state.dispatch(Action::EditEmployee(EmployeeField::FullName, "Ana".to_string()));
        state.dispatch(Action::SubmitEmployee);
        assert!(state.banner.is_some());
        state.dispatch(Action::ToggleMenu);
        assert!(state.menu_open);

        let effects = state.dispatch(Action::Navigate(View::QrTerminal));

        assert!(effects.is_empty());
        assert_eq!(state.view, View::QrTerminal);
        assert_eq!(state.banner, None);
        assert_eq!(state.employee_form, EmployeeForm::default());
        assert!(!state.menu_open);
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut state = signed_in(View::QrTerminal);
        state.dispatch(Action::EditManualId("12".to_string()));
        let before = state.generation();

        state.dispatch(Action::Logout);

        assert!(!state.is_authenticated());
        assert_eq!(state.view, View::Login);
        assert!(state.checkin.manual_id.is_empty());
        assert!(state.records.is_empty());
        assert!(state.generation() > before);
    }

    #[test]
    fn test_registration_redirects_after_delay() {
        let mut state = AppState::default();
        state.dispatch(Action::Navigate(View::Registration));
        state.dispatch(Action::EditRegistration(RegistrationField::CompanyName, "Acme".to_string()));
        state.dispatch(Action::EditRegistration(RegistrationField::Email, "a@acme.test".to_string()));
        state.dispatch(Action::EditRegistration(RegistrationField::Password, "secret1".to_string()));

        let Effect::Register { ticket, request } =
            only_effect(state.dispatch(Action::SubmitRegistration))
        else {
            panic!("expected register effect");
        };
        assert_eq!(request.company_name, "Acme");

        let effect = only_effect(state.dispatch(Action::RegistrationFinished {
            ticket,
            result: Ok(MessageReply {
                message: "Cuenta creada.".to_string(),
                status: None,
            }),
        }));
        assert_eq!(state.banner, Some(Banner::success("Cuenta creada.")));
        assert_eq!(state.registration, RegistrationForm::default());

        let Effect::RedirectToLogin { ticket, after } = effect else {
            panic!("expected redirect effect");
        };
        assert_eq!(after, Duration::from_secs(2));

        state.dispatch(Action::RedirectElapsed { ticket });
        assert_eq!(state.view, View::Login);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn test_redirect_is_dropped_after_manual_navigation() {
        let mut state = AppState::default();
        state.dispatch(Action::Navigate(View::Registration));
        let ticket = Ticket::new(state.generation());
        state.dispatch(Action::Navigate(View::Login));
        state.dispatch(Action::Navigate(View::Registration));

        state.dispatch(Action::RedirectElapsed { ticket });
        assert_eq!(state.view, View::Registration);
    }

    #[test]
    fn test_upload_without_file_is_local_error() {
        let mut state = signed_in(View::BulkUpload);
        let effects = state.dispatch(Action::SubmitUpload);

        assert!(effects.is_empty());
        assert_eq!(
            state.banner,
            Some(Banner::error(ValidationError::NoFileSelected.to_string()))
        );
    }

    #[test]
    fn test_upload_success_clears_selection() {
        let mut state = signed_in(View::BulkUpload);
        state.dispatch(Action::SelectFile(Some(UploadFile {
            name: "asistencia.xlsx".to_string(),
            bytes: vec![1, 2, 3],
        })));

        let Effect::Upload { ticket, auth, file } =
            only_effect(state.dispatch(Action::SubmitUpload))
        else {
            panic!("expected upload effect");
        };
        assert_eq!(auth.tenant_id, 7);
        assert_eq!(file.name, "asistencia.xlsx");
        assert_eq!(state.banner.as_ref().map(|b| b.tone), Some(Tone::Info));

        state.dispatch(Action::UploadFinished {
            ticket,
            result: Ok(UploadReceipt {
                rows_imported: 3,
                status: None,
            }),
        });
        assert_eq!(state.banner, Some(Banner::success("3 records processed.")));
        assert_eq!(state.upload_file, None);
    }

    #[test]
    fn test_selecting_a_file_clears_previous_banner() {
        let mut state = signed_in(View::BulkUpload);
        state.dispatch(Action::SubmitUpload);
        assert!(state.banner.as_ref().is_some_and(Banner::is_error));

        state.dispatch(Action::SelectFile(Some(UploadFile {
            name: "asistencia.xlsx".to_string(),
            bytes: vec![1],
        })));

        assert_eq!(state.banner, None);
        assert_eq!(
            state.upload_file.as_ref().map(|f| f.name.as_str()),
            Some("asistencia.xlsx")
        );
    }

    #[test]
    fn test_late_file_selection_after_leaving_import_is_ignored() {
        let mut state = signed_in(View::QrTerminal);
        let Effect::LoadDashboard { ticket, .. } =
            only_effect(state.dispatch(Action::Navigate(View::Dashboard)))
        else {
            panic!("expected dashboard load");
        };
        state.dispatch(Action::DashboardLoaded {
            ticket,
            snapshot: DashboardSnapshot {
                records: Ok(Vec::new()),
                statistics: Err(ApiError::Server {
                    status: 500,
                    detail: Some("boom".to_string()),
                }),
            },
        });
        let before = state.clone();

        let effects = state.dispatch(Action::SelectFile(Some(UploadFile {
            name: "late.xlsx".to_string(),
            bytes: vec![1, 2, 3],
        })));

        assert!(effects.is_empty());
        assert_eq!(state, before);
        assert_eq!(
            state.banner,
            Some(Banner::warning("Could not load the statistics: boom"))
        );
        assert_eq!(state.upload_file, None);
    }

    #[test]
    fn test_non_numeric_scan_is_rejected_locally() {
        let mut state = signed_in(View::QrTerminal);
        let effects = state.dispatch(Action::Scanned {
            raw: "abc".to_string(),
            at_ms: 1_000,
        });
        assert!(effects.is_empty());
        assert_eq!(
            state.banner,
            Some(Banner::error(ValidationError::InvalidEmployeeId.to_string()))
        );
    }

    #[test]
    fn test_numeric_scan_issues_one_checkin() {
        let mut state = signed_in(View::QrTerminal);
        let effect = only_effect(state.dispatch(Action::Scanned {
            raw: "42".to_string(),
            at_ms: 1_000,
        }));
        let Effect::Checkin { request, auth, .. } = effect else {
            panic!("expected check-in effect");
        };
        assert_eq!(request.employee_id, 42);
        assert_eq!(request.training_id, 1);
        assert_eq!(auth.tenant_id, 7);

        // Same code still in front of the camera
        assert!(state
            .dispatch(Action::Scanned {
                raw: "42".to_string(),
                at_ms: 1_400,
            })
            .is_empty());
    }

    #[test]
    fn test_checkin_success_strips_glyphs_and_clears_manual_id() {
        let mut state = signed_in(View::QrTerminal);
        state.dispatch(Action::EditManualId("42".to_string()));
        let Effect::Checkin { ticket, .. } =
            only_effect(state.dispatch(Action::SubmitManualCheckin))
        else {
            panic!("expected check-in effect");
        };

        state.dispatch(Action::CheckinFinished {
            ticket,
            result: Ok(MessageReply {
                message: "✅ Asistencia registrada. Empleado: 42".to_string(),
                status: None,
            }),
        });
        assert_eq!(
            state.banner,
            Some(Banner::success("Asistencia registrada. Empleado: 42"))
        );
        assert!(state.checkin.manual_id.is_empty());
    }

    #[test]
    fn test_dashboard_reverses_records() {
        let mut state = signed_in(View::QrTerminal);
        let Effect::LoadDashboard { ticket, .. } =
            only_effect(state.dispatch(Action::Navigate(View::Dashboard)))
        else {
            panic!("expected dashboard load");
        };

        state.dispatch(Action::DashboardLoaded {
            ticket,
            snapshot: DashboardSnapshot {
                records: Ok(vec![
                    record(1, "2026-02-23 08:00:00"),
                    record(2, "2026-02-23 08:05:00"),
                    record(3, "2026-02-23 08:10:00"),
                ]),
                statistics: Ok(Statistics::default()),
            },
        });

        let ids: Vec<i64> = state.records.iter().map(|r| r.employee_id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(!state.in_flight.dashboard);
        assert_eq!(state.banner, None);
    }

    #[test]
    fn test_dashboard_partial_failure_keeps_good_half() {
        let mut state = signed_in(View::QrTerminal);
        let Effect::LoadDashboard { ticket, .. } =
            only_effect(state.dispatch(Action::Navigate(View::Dashboard)))
        else {
            panic!("expected dashboard load");
        };

        state.dispatch(Action::DashboardLoaded {
            ticket,
            snapshot: DashboardSnapshot {
                records: Ok(vec![record(5, "2026-02-23 09:00:00")]),
                statistics: Err(ApiError::Server {
                    status: 500,
                    detail: Some("boom".to_string()),
                }),
            },
        });

        assert_eq!(state.records.len(), 1);
        assert_eq!(
            state.banner,
            Some(Banner::warning("Could not load the statistics: boom"))
        );
    }

    #[test]
    fn test_dashboard_total_failure_is_an_error() {
        let mut state = signed_in(View::QrTerminal);
        let Effect::LoadDashboard { ticket, .. } =
            only_effect(state.dispatch(Action::Navigate(View::Dashboard)))
        else {
            panic!("expected dashboard load");
        };
        let offline = ApiError::Network("refused".to_string());
        state.dispatch(Action::DashboardLoaded {
            ticket,
            snapshot: DashboardSnapshot {
                records: Err(offline.clone()),
                statistics: Err(offline),
            },
        });
        assert!(state.banner.as_ref().is_some_and(Banner::is_error));
    }

    #[test]
    fn test_stale_dashboard_response_is_ignored() {
        let mut state = signed_in(View::QrTerminal);
        let Effect::LoadDashboard { ticket, .. } =
            only_effect(state.dispatch(Action::Navigate(View::Dashboard)))
        else {
            panic!("expected dashboard load");
        };
        state.dispatch(Action::Navigate(View::Directory));

        state.dispatch(Action::DashboardLoaded {
            ticket,
            snapshot: DashboardSnapshot {
                records: Ok(vec![record(9, "2026-02-23 10:00:00")]),
                statistics: Ok(Statistics::default()),
            },
        });

        assert!(state.records.is_empty());
        assert_eq!(state.view, View::Directory);
    }

    #[test]
    fn test_blank_department_is_rejected_without_request() {
        let mut state = signed_in(View::Directory);
        state.dispatch(Action::EditEmployee(EmployeeField::EmployeeId, "10".to_string()));
        state.dispatch(Action::EditEmployee(EmployeeField::FullName, "Ana".to_string()));
        state.dispatch(Action::EditEmployee(EmployeeField::Role, "Clerk".to_string()));

        assert!(state.dispatch(Action::SubmitEmployee).is_empty());
        assert_eq!(
            state.banner,
            Some(Banner::error(ValidationError::MissingEmployeeFields.to_string()))
        );
    }

    #[test]
    fn test_edit_then_cancel_restores_empty_form() {
        let mut state = signed_in(View::Directory);

        let effects = state.dispatch(Action::BeginEdit(employee(15, "Marta")));
        assert_eq!(effects, vec![Effect::ScrollToTop]);
        assert_eq!(state.employee_form.editing, Some(15));
        assert_eq!(state.employee_form.full_name, "Marta");

        let effects = state.dispatch(Action::CancelEdit);
        assert!(effects.is_empty());
        assert_eq!(state.employee_form, EmployeeForm::default());
    }

    #[test]
    fn test_only_one_record_in_edit() {
        let mut state = signed_in(View::Directory);
        state.dispatch(Action::BeginEdit(employee(1, "Uno")));
        state.dispatch(Action::BeginEdit(employee(2, "Dos")));
        assert_eq!(state.employee_form.editing, Some(2));
        assert_eq!(state.employee_form.employee_id, "2");
    }

    #[test]
    fn test_save_in_edit_mode_updates_then_reloads() {
        let mut state = signed_in(View::Directory);
        state.dispatch(Action::BeginEdit(employee(15, "Marta")));
        state.dispatch(Action::EditEmployee(EmployeeField::Role, "Lead".to_string()));

        let Effect::SaveEmployee {
            ticket,
            mode,
            employee,
            ..
        } = only_effect(state.dispatch(Action::SubmitEmployee))
        else {
            panic!("expected save effect");
        };
        assert_eq!(mode, SaveMode::Update { employee_id: 15 });
        assert_eq!(employee.role, "Lead");

        let effect = only_effect(state.dispatch(Action::EmployeeSaved {
            ticket,
            result: Ok(MessageReply {
                message: "Datos actualizados.".to_string(),
                status: None,
            }),
        }));
        assert!(matches!(effect, Effect::LoadDirectory { .. }));
        assert!(!state.employee_form.is_editing());
        assert_eq!(state.banner, Some(Banner::success("Datos actualizados.")));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut state = signed_in(View::Directory);

        assert!(state
            .dispatch(Action::RequestDelete(employee(3, "Tres")))
            .is_empty());
        assert_eq!(state.pending_delete.as_ref().map(|e| e.employee_id), Some(3));

        assert!(state.dispatch(Action::CancelDelete).is_empty());
        assert!(state.dispatch(Action::ConfirmDelete).is_empty());

        state.dispatch(Action::RequestDelete(employee(3, "Tres")));
        let Effect::DeleteEmployee {
            ticket,
            employee_id,
            ..
        } = only_effect(state.dispatch(Action::ConfirmDelete))
        else {
            panic!("expected delete effect");
        };
        assert_eq!(employee_id, 3);

        let effect = only_effect(state.dispatch(Action::EmployeeDeleted {
            ticket,
            employee_id,
            result: Ok(()),
        }));
        assert!(matches!(effect, Effect::LoadDirectory { .. }));
    }

    #[test]
    fn test_failed_delete_does_not_reload() {
        let mut state = signed_in(View::Directory);
        state.dispatch(Action::RequestDelete(employee(3, "Tres")));
        let Effect::DeleteEmployee { ticket, .. } =
            only_effect(state.dispatch(Action::ConfirmDelete))
        else {
            panic!("expected delete effect");
        };
        let effects = state.dispatch(Action::EmployeeDeleted {
            ticket,
            employee_id: 3,
            result: Err(ApiError::Network("refused".to_string())),
        });
        assert!(effects.is_empty());
        assert!(state.banner.as_ref().is_some_and(Banner::is_error));
    }
}
