//! Inputs and outputs of the reducer.
//!
//! An [`Action`] is something that happened (a keystroke, a click, a
//! finished request). An [`Effect`] is work the reducer asks the runtime to
//! do; its completion comes back as another action carrying the same
//! [`Ticket`].

use std::time::Duration;

use hris_wire::{
    CheckinRequest, Credentials, Employee, LoginResponse, MessageReply, RegistrationRequest,
    UploadReceipt,
};

use super::forms::{EmployeeField, LoginField, RegistrationField};
use super::view::View;
use crate::client::{DashboardSnapshot, TenantAuth, UploadFile};
use crate::error::ApiError;

/// Generation stamp of an in-flight request.
///
/// Every view transition, login and logout advances the generation; a
/// completion whose ticket is older is a stale response and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Whether a directory submit creates or updates a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update { employee_id: i64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation and session
    Navigate(View),
    ToggleMenu,
    Logout,

    // Login
    EditLogin(LoginField, String),
    SubmitLogin,
    LoginFinished {
        ticket: Ticket,
        result: Result<LoginResponse, ApiError>,
    },

    // Registration
    EditRegistration(RegistrationField, String),
    SubmitRegistration,
    RegistrationFinished {
        ticket: Ticket,
        result: Result<MessageReply, ApiError>,
    },
    RedirectElapsed {
        ticket: Ticket,
    },

    // Bulk import
    SelectFile(Option<UploadFile>),
    SubmitUpload,
    UploadFinished {
        ticket: Ticket,
        result: Result<UploadReceipt, ApiError>,
    },

    // QR terminal
    EditManualId(String),
    SubmitManualCheckin,
    Scanned {
        raw: String,
        at_ms: u64,
    },
    CheckinFinished {
        ticket: Ticket,
        result: Result<MessageReply, ApiError>,
    },

    // Dashboard
    RefreshDashboard,
    DashboardLoaded {
        ticket: Ticket,
        snapshot: DashboardSnapshot,
    },

    // Directory
    RefreshDirectory,
    DirectoryLoaded {
        ticket: Ticket,
        result: Result<Vec<Employee>, ApiError>,
    },
    EditEmployee(EmployeeField, String),
    SubmitEmployee,
    EmployeeSaved {
        ticket: Ticket,
        result: Result<MessageReply, ApiError>,
    },
    BeginEdit(Employee),
    CancelEdit,
    RequestDelete(Employee),
    ConfirmDelete,
    CancelDelete,
    EmployeeDeleted {
        ticket: Ticket,
        employee_id: i64,
        result: Result<(), ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Login {
        ticket: Ticket,
        credentials: Credentials,
    },
    Register {
        ticket: Ticket,
        request: RegistrationRequest,
    },
    /// Wait, then report [`Action::RedirectElapsed`]
    RedirectToLogin {
        ticket: Ticket,
        after: Duration,
    },
    Upload {
        ticket: Ticket,
        auth: TenantAuth,
        file: UploadFile,
    },
    Checkin {
        ticket: Ticket,
        auth: TenantAuth,
        request: CheckinRequest,
    },
    LoadDashboard {
        ticket: Ticket,
        auth: TenantAuth,
    },
    LoadDirectory {
        ticket: Ticket,
        auth: TenantAuth,
    },
    SaveEmployee {
        ticket: Ticket,
        auth: TenantAuth,
        mode: SaveMode,
        employee: Employee,
    },
    DeleteEmployee {
        ticket: Ticket,
        auth: TenantAuth,
        employee_id: i64,
    },
    ScrollToTop,
}
