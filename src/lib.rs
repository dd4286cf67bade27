//! HRIS Attendance - browser front end
//!
//! A single-page client for a multi-tenant HR attendance backend.
//!
//! This library provides:
//! - Company sign-in and registration
//! - Bulk Excel attendance import
//! - QR check-in terminal (camera and manual entry)
//! - Attendance dashboard (log, summary figures, hourly volume)
//! - Employee directory with create, edit and delete
//! - Web UI (Dioxus + Tailwind CSS)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Backend client and configuration (shared)
pub mod client;
pub mod config;
pub mod error;

// View state, reducer and effect runtime (shared, UI independent)
pub mod platform;
pub mod runtime;
pub mod state;

pub use client::{AttendanceBackend, HrisClient};
pub use config::ClientConfig;
pub use error::{ApiError, ValidationError};
pub use state::{Action, AppState, Effect, View};
