//! Configuration management

use serde::Deserialize;

/// Backend used when nothing else is configured (local development server)
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the attendance backend, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Minimum gap between two accepted camera scans
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,

    /// Delay before a successful registration returns to the login view
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,

    /// Per-request timeout (native builds only; the browser owns fetch timeouts)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_scan_delay_ms() -> u64 {
    2000
}

fn default_redirect_delay_ms() -> u64 {
    2000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            scan_delay_ms: default_scan_delay_ms(),
            redirect_delay_ms: default_redirect_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Configuration baked in at build time.
    ///
    /// WASM bundles cannot read the environment at runtime, so
    /// `HRIS_API_BASE_URL` is captured by the compiler (see `build.rs`).
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("HRIS_API_BASE_URL") {
            config.api_base_url = url.to_string();
        }
        config.normalized()
    }

    /// Resolve the configuration for the current target.
    ///
    /// Server builds layer the config file and environment over the
    /// defaults; anything else uses the build-time values.
    pub fn resolve() -> Self {
        #[cfg(all(feature = "server", not(target_arch = "wasm32")))]
        {
            match load_config() {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to load configuration, using defaults: {:#}", e);
                }
            }
        }
        Self::from_build_env()
    }

    /// Validate the base URL and strip trailing slashes.
    ///
    /// An unparsable URL falls back to the default backend.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/').to_string();
        match url::Url::parse(&trimmed) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
                self.api_base_url = trimmed;
            }
            _ => {
                tracing::warn!(
                    url = %self.api_base_url,
                    "Invalid API base URL, falling back to {}",
                    DEFAULT_API_BASE_URL
                );
                self.api_base_url = default_api_base_url();
            }
        }
        self
    }
}

/// Directory holding the optional `config.{toml,json,yaml}` file
#[cfg(feature = "server")]
pub fn get_config_dir() -> std::path::PathBuf {
    directories::ProjectDirs::from("com", "hris", "hris-attendance")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}

#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<ClientConfig> {
    load_config_from(&get_config_dir())
}

#[cfg(feature = "server")]
pub fn load_config_from(config_dir: &std::path::Path) -> anyhow::Result<ClientConfig> {
    let config = ::config::Config::builder()
        // Start with defaults
        .set_default("api_base_url", DEFAULT_API_BASE_URL)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy())
                .required(false),
        )
        // Override with environment variables (HRIS_API_BASE_URL, HRIS_SCAN_DELAY_MS, etc.)
        .add_source(::config::Environment::with_prefix("HRIS").try_parsing(true))
        .build()?;

    let config: ClientConfig = config.try_deserialize()?;
    Ok(config.normalized())
}
