//! Line-oriented console session over the notification store.
//!
//! Each input line is parsed into a [`Command`] and applied to the store
//! before the next line is read.

use chrono::{DateTime, TimeZone};
use notification_center_types::NotificationTab;
use std::fmt::Display;
use strum::{EnumString, IntoEnumIterator};

use crate::config::Config;
use crate::notifications::display::{self, ListOptions};
use crate::notifications::NotificationStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
enum Verb {
    List,
    Dashboard,
    Read,
    ReadAll,
    Dismiss,
    Count,
    Json,
    Help,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List {
        tab: NotificationTab,
        limit: Option<usize>,
    },
    Dashboard,
    Read(String),
    ReadAll,
    Dismiss(String),
    Count,
    Json,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Ok(None);
        };

        let verb: Verb = first
            .parse()
            .map_err(|_| format!("Unknown command '{}'. Type 'help' for a list.", first))?;

        let command = match verb {
            Verb::List => {
                let mut tab = NotificationTab::All;
                let mut limit = None;
                for arg in words {
                    if let Ok(n) = arg.parse::<usize>() {
                        limit = Some(n);
                    } else {
                        tab = arg.parse().map_err(|_| {
                            format!("Unknown tab '{}'. Expected one of: {}", arg, tab_names())
                        })?;
                    }
                }
                Command::List { tab, limit }
            }
            Verb::Read => Command::Read(required_id(words.next(), "read")?),
            Verb::Dismiss => Command::Dismiss(required_id(words.next(), "dismiss")?),
            Verb::Dashboard => Command::Dashboard,
            Verb::ReadAll => Command::ReadAll,
            Verb::Count => Command::Count,
            Verb::Json => Command::Json,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };

        Ok(Some(command))
    }
}

fn required_id(arg: Option<&str>, verb: &str) -> Result<String, String> {
    arg.map(str::to_string)
        .ok_or_else(|| format!("Usage: {} <id>", verb))
}

fn tab_names() -> String {
    NotificationTab::iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the caller should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// A console session owning the single store instance
pub struct Session {
    store: NotificationStore,
    config: Config,
}

impl Session {
    pub fn new(store: NotificationStore, config: Config) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    pub fn banner(&self) -> String {
        match display::unread_badge(self.store.unread_count()) {
            Some(badge) => format!(
                "Notification Center: {} alerts, {} unread. Type 'help' for commands.",
                self.store.len(),
                badge
            ),
            None => format!(
                "Notification Center: {} alerts, all read. Type 'help' for commands.",
                self.store.len()
            ),
        }
    }

    pub fn execute<Tz>(&mut self, command: Command, now: &DateTime<Tz>) -> Reply
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let output = match command {
            Command::List { tab, limit } => {
                let view = self.store.view(tab);
                display::render_list(
                    &view,
                    tab,
                    now,
                    ListOptions {
                        limit,
                        show_actions: self.config.show_actions,
                    },
                )
            }
            Command::Dashboard => {
                let view = self.store.view(NotificationTab::All);
                display::render_list(
                    &view,
                    NotificationTab::All,
                    now,
                    ListOptions {
                        limit: Some(self.config.dashboard_preview_limit),
                        show_actions: false,
                    },
                )
            }
            Command::Read(id) => {
                if self.store.mark_as_read(&id) {
                    format!("Marked #{} as read", id)
                } else if self.store.get(&id).is_some() {
                    format!("#{} was already read", id)
                } else {
                    format!("No notification #{}", id)
                }
            }
            Command::ReadAll => {
                if !self.store.has_unread() {
                    "Nothing to mark, all notifications are read".to_string()
                } else {
                    self.store.mark_all_as_read();
                    "All notifications marked as read".to_string()
                }
            }
            Command::Dismiss(id) => {
                if self.store.dismiss_notification(&id) {
                    format!("Dismissed #{}", id)
                } else {
                    format!("No notification #{}", id)
                }
            }
            Command::Count => match display::unread_badge(self.store.unread_count()) {
                Some(badge) => format!("{} unread", badge),
                None => "No unread notifications".to_string(),
            },
            Command::Json => match serde_json::to_string_pretty(&self.store.snapshot()) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("[CONSOLE] Failed to serialize snapshot: {}", e);
                    format!("Failed to serialize notifications: {}", e)
                }
            },
            Command::Help => help_text(),
            Command::Quit => return Reply::Quit,
        };

        Reply::Output(output)
    }
}

fn help_text() -> String {
    format!(
        "Commands:\n  \
         list [tab] [limit]   show notifications (tabs: {})\n  \
         dashboard            preview of the latest alerts\n  \
         read <id>            mark one notification as read\n  \
         read-all             mark every notification as read\n  \
         dismiss <id>         remove a notification\n  \
         count                unread badge\n  \
         json                 dump the current state as JSON\n  \
         quit                 leave",
        tab_names()
    )
}
