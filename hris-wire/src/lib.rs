//! Wire contract types for the HRIS attendance backend.
//!
//! The backend speaks JSON with Spanish field names (`usuario_id`,
//! `id_empleado`, `filas_registradas`, ...). Every type here keeps an
//! English Rust name and maps to the backend name through serde, so the
//! rest of the client never touches raw wire keys.
//!
//! # Modules
//! - [`auth`] - login and registration bodies
//! - [`attendance`] - bulk upload receipts, QR check-ins, records, statistics
//! - [`employee`] - employee directory rows
//! - [`reply`] - generic message replies and error bodies

pub mod attendance;
pub mod auth;
pub mod employee;
pub mod reply;

pub use attendance::{
    AttendanceRecord, CheckinRequest, CheckinStatus, HourlyVolume, Statistics, SummaryItem,
    UploadReceipt, DEFAULT_TRAINING_ID,
};
pub use auth::{Credentials, LoginResponse, RegistrationRequest};
pub use employee::Employee;
pub use reply::{ErrorBody, MessageReply};
