/// Backend used when nothing else is configured (local development server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Patient identifier pre-filled in both views.
pub const DEFAULT_USER_ID: &str = "1";

const BASE_URL_VAR: &str = "DOSEWATCH_API_BASE_URL";
const USER_ID_VAR: &str = "DOSEWATCH_DEFAULT_USER_ID";

/// Client settings injected into the views at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    pub default_user_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            default_user_id: DEFAULT_USER_ID.to_string(),
        }
    }

    /// Resolve settings from the environment.
    ///
    /// Native builds read the process environment (after loading `.env`);
    /// web builds only see values baked in at compile time. Unset or blank
    /// values fall back to the defaults.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let _ = dotenvy::dotenv();

        let api_base_url = resolve(
            runtime_var(BASE_URL_VAR),
            option_env!("DOSEWATCH_API_BASE_URL"),
            DEFAULT_API_BASE_URL,
        );
        let default_user_id = resolve(
            runtime_var(USER_ID_VAR),
            option_env!("DOSEWATCH_DEFAULT_USER_ID"),
            DEFAULT_USER_ID,
        );

        let config = Self {
            api_base_url: normalize_base_url(&api_base_url),
            default_user_id,
        };
        tracing::info!(api_base_url = %config.api_base_url, "client configuration loaded");
        config
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn runtime_var(_name: &str) -> Option<String> {
    None
}

/// First non-blank of runtime value, compile-time value, default.
fn resolve(runtime: Option<String>, compiled: Option<&str>, default: &str) -> String {
    runtime
        .filter(|v| !v.trim().is_empty())
        .or_else(|| {
            compiled
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| default.to_string())
        .trim()
        .to_string()
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
