//! Shared UI components for the Dioxus web UI.

pub mod banner;
pub mod layout;
pub mod nav;
pub mod scanner;

pub use banner::StatusBanner;
pub use layout::Layout;
pub use nav::Nav;
pub use scanner::Scanner;
