use actix_web::cookie::Key;
use std::time::Duration;

use crate::store::registry::{DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_WORKSPACES};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_APP_NAME: &str = "AttendanceApp";
const MIN_SESSION_KEY_LEN: usize = 64;

/// Runtime settings, read from the environment (and `.env` if present).
#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_key: Key,
    pub cookie_secure: bool,
    pub app_name: String,
    /// Idle time after which a session's workspace is dropped.
    pub workspace_idle: Duration,
    pub max_workspaces: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::info!("Loaded environment from {}", path.display());
        }

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let app_name = std::env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string());
        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        let workspace_idle = std::env::var("WORKSPACE_IDLE_MINUTES")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(|m| Duration::from_secs(m * 60))
            .unwrap_or(DEFAULT_IDLE_TIMEOUT);
        let max_workspaces = std::env::var("MAX_WORKSPACES")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_WORKSPACES);

        Self {
            bind_addr,
            session_key: session_key_from(std::env::var("SESSION_KEY").ok()),
            cookie_secure,
            app_name,
            workspace_idle,
            max_workspaces,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_key: Key::generate(),
            cookie_secure: false,
            app_name: DEFAULT_APP_NAME.to_string(),
            workspace_idle: DEFAULT_IDLE_TIMEOUT,
            max_workspaces: DEFAULT_MAX_WORKSPACES,
        }
    }
}

/// Session encryption key. Sessions only survive restarts with a fixed
/// SESSION_KEY of 64+ bytes.
fn session_key_from(val: Option<String>) -> Key {
    match val {
        Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                val.len()
            );
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

/// Truthy env/query flag: `1`, `true`, `yes`, `on`.
pub fn parse_flag(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
