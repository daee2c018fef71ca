//! Initial notification feed.
//!
//! The store is populated once at startup, either from the built-in pharmacy
//! alerts or from a RON file named by `PHARMACY_NOTIFICATIONS_SEED`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use notification_center_types::{Notification, NotificationType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// One entry of a seed file. `id` and `read` may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedNotification {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub message: String,
    pub severity: NotificationType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl From<SeedNotification> for Notification {
    fn from(seed: SeedNotification) -> Self {
        let id = seed
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        Notification::new(id, seed.title, seed.message, seed.severity, seed.timestamp)
            .with_read(seed.read)
    }
}

/// The dashboard's built-in alerts, timestamped relative to `now`
pub fn mock_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification::new(
            "1",
            "Low Stock Alert",
            "Paracetamol stock is below 5 units",
            NotificationType::Warning,
            now - Duration::minutes(20),
        ),
        Notification::new(
            "2",
            "Expiry Alert",
            "Ibuprofen expired yesterday",
            NotificationType::Danger,
            now - Duration::hours(2),
        ),
        Notification::new(
            "3",
            "Restock Reminder",
            "Amoxicillin needs to be reordered",
            NotificationType::Info,
            now - Duration::hours(5),
        ),
        Notification::new(
            "4",
            "New Supplier",
            "MediPharma has been added as a supplier",
            NotificationType::Info,
            now - Duration::days(1),
        )
        .with_read(true),
        Notification::new(
            "5",
            "Expiry Alert",
            "Vitamin C will expire in 7 days",
            NotificationType::Warning,
            now - Duration::days(2),
        )
        .with_read(true),
    ]
}

/// Parse a RON seed document (a list of `SeedNotification`)
pub fn parse_seed(content: &str, path: &Path) -> Result<Vec<Notification>, SeedError> {
    let entries: Vec<SeedNotification> = ron::from_str(content).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(entries.into_iter().map(Notification::from).collect())
}

pub fn load_seed_file(path: &Path) -> Result<Vec<Notification>, SeedError> {
    let content = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&content, path)
}

/// Load the configured seed file, falling back to the built-in alerts on any error.
pub fn load_or_default(config: &Config, now: DateTime<Utc>) -> Vec<Notification> {
    let Some(path) = config.seed_path.as_deref() else {
        log::debug!("[SEED] No seed file configured, using built-in alerts");
        return mock_notifications(now);
    };

    match load_seed_file(path) {
        Ok(notifications) => {
            log::info!(
                "[SEED] Loaded {} notifications from {}",
                notifications.len(),
                path.display()
            );
            notifications
        }
        Err(e) => {
            log::warn!("[SEED] {}, using built-in alerts", e);
            mock_notifications(now)
        }
    }
}
