//! HRIS Attendance
//!
//! Serves the Dioxus app (SSR + hydration) or runs it in the browser,
//! depending on the enabled feature.

fn main() {
    #[cfg(feature = "server")]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        // Initialize logging
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hris_attendance=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();

        let config = hris_attendance::ClientConfig::resolve();
        tracing::info!(
            api_base_url = %config.api_base_url,
            "Starting HRIS Attendance v{}",
            env!("CARGO_PKG_VERSION")
        );
    }

    dioxus::launch(hris_attendance::app::App);
}
