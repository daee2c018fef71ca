use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Optional path to a RON file with the initial notification feed.
    /// When unset the built-in pharmacy alerts are used.
    pub const NOTIFICATIONS_SEED: &str = "PHARMACY_NOTIFICATIONS_SEED";
    /// Number of alerts shown by the dashboard preview; 0 shows all of them
    pub const DASHBOARD_PREVIEW_LIMIT: &str = "PHARMACY_DASHBOARD_PREVIEW_LIMIT";
    /// Set to "false" or "0" to hide per-row action hints
    pub const SHOW_ACTIONS: &str = "PHARMACY_SHOW_ACTIONS";
}

/// Default values
pub mod defaults {
    pub const DASHBOARD_PREVIEW_LIMIT: usize = 3;
    pub const SHOW_ACTIONS: bool = true;
    pub const LOG_FILTER: &str = "info";
}

/// Returns the absolute path to the pharmacy-backend directory.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Path of the sample seed file shipped with the backend
pub fn sample_seed_path() -> PathBuf {
    backend_dir().join("config").join("notifications.ron")
}

#[derive(Clone, Debug)]
pub struct Config {
    pub seed_path: Option<PathBuf>,
    pub dashboard_preview_limit: usize,
    pub show_actions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_path: None,
            dashboard_preview_limit: defaults::DASHBOARD_PREVIEW_LIMIT,
            show_actions: defaults::SHOW_ACTIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so parsing stays testable
    /// without touching the process environment.
    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let seed_path = lookup(env_vars::NOTIFICATIONS_SEED)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let dashboard_preview_limit = match lookup(env_vars::DASHBOARD_PREVIEW_LIMIT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "{} must be a non-negative number, got {:?}, using {}",
                    env_vars::DASHBOARD_PREVIEW_LIMIT,
                    raw,
                    defaults::DASHBOARD_PREVIEW_LIMIT
                );
                defaults::DASHBOARD_PREVIEW_LIMIT
            }),
            None => defaults::DASHBOARD_PREVIEW_LIMIT,
        };

        let show_actions = lookup(env_vars::SHOW_ACTIONS)
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0"))
            .unwrap_or(defaults::SHOW_ACTIONS);

        Self {
            seed_path,
            dashboard_preview_limit,
            show_actions,
        }
    }
}
