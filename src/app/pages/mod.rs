//! Dioxus page components, one per view.
//!
//! Pages only read the store and dispatch actions; every request runs
//! through the reducer and the effect runtime.

mod dashboard;
mod directory;
mod login;
mod registration;
mod terminal;
mod upload;

pub use dashboard::Dashboard;
pub use directory::Directory;
pub use login::Login;
pub use registration::Registration;
pub use terminal::QrTerminal;
pub use upload::BulkUpload;
